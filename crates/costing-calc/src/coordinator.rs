//! 級聯重算協調器
//!
//! 維持不變式：每個被追蹤產品的衍生欄位永遠反映
//! 當前名冊平均實際時薪與當前價格目錄。
//! 名冊與目錄以快照形式在每次異動通知時傳入（不持有環境全域狀態）；
//! 重算一律「從當前輸入全量重算」，重複執行結果恆等。
//! 相依方向固定為 名冊 → 目錄 → 產品，產品重算絕不回頭改動名冊或目錄。

use costing_core::{CostingError, Currency, MaterialPriceCatalog, Result};
use rust_decimal::Decimal;

use crate::employee::Employee;
use crate::product::Product;

/// 產品集合類別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductCollection {
    /// 進行中的生產清單
    Production,
    /// 成本試算清單
    CostSheet,
}

/// 級聯重算協調器
#[derive(Debug, Default)]
pub struct RecalculationCoordinator {
    production: Vec<Product>,

    cost_sheet: Vec<Product>,

    /// 當前套用的名冊平均實際時薪
    labor_rate: Decimal,

    /// 全域匯率覆蓋設定
    fx_override: Option<Decimal>,
}

impl RecalculationCoordinator {
    /// 創建新的協調器
    pub fn new() -> Self {
        Self::default()
    }

    /// 加入產品並立即套用當前平均時薪
    pub fn add_product(&mut self, collection: ProductCollection, mut product: Product) {
        product.set_labor_rate(self.labor_rate);
        self.collection_mut(collection).push(product);
    }

    /// 依完整組合名移除產品
    pub fn remove_product(
        &mut self,
        collection: ProductCollection,
        full_name: &str,
    ) -> Result<Product> {
        let list = self.collection_mut(collection);
        match list.iter().position(|p| p.full_name() == full_name) {
            Some(index) => Ok(list.remove(index)),
            None => Err(CostingError::ProductNotFound(full_name.to_string())),
        }
    }

    /// 進行中的生產清單
    pub fn production(&self) -> &[Product] {
        &self.production
    }

    /// 成本試算清單
    pub fn cost_sheet(&self) -> &[Product] {
        &self.cost_sheet
    }

    /// 依完整組合名查找產品（先生產清單，後試算清單）
    pub fn find(&self, full_name: &str) -> Option<&Product> {
        self.production
            .iter()
            .chain(self.cost_sheet.iter())
            .find(|p| p.full_name() == full_name)
    }

    /// 當前套用的名冊平均實際時薪
    pub fn labor_rate(&self) -> Decimal {
        self.labor_rate
    }

    /// 當前匯率覆蓋設定
    pub fn fx_override(&self) -> Option<Decimal> {
        self.fx_override
    }

    /// 名冊異動：重算名冊平均實際時薪並推送至所有追蹤產品
    ///
    /// 返回新的平均值。
    pub fn on_roster_changed(&mut self, roster: &[Employee]) -> Decimal {
        let average = Self::roster_average(roster);
        tracing::info!(
            "名冊異動：{} 名員工，平均實際時薪 {}",
            roster.len(),
            average
        );

        self.labor_rate = average;
        for product in self.all_products_mut() {
            tracing::debug!("套用平均時薪至產品 {}", product.full_name());
            product.set_labor_rate(average);
        }
        average
    }

    /// 名冊平均實際時薪（名冊為空時取 0）
    pub fn roster_average(roster: &[Employee]) -> Decimal {
        if roster.is_empty() {
            return Decimal::ZERO;
        }
        let total: Decimal = roster.iter().map(|e| e.effective_hourly_cost()).sum();
        total / Decimal::from(roster.len() as u64)
    }

    /// 價格目錄異動：所有追蹤產品以新目錄（與當前匯率覆蓋）重算原物料成本
    pub fn on_material_prices_changed(&mut self, catalog: &MaterialPriceCatalog) {
        tracing::info!(
            "價格目錄異動：{} 筆物料，重算 {} 個產品",
            catalog.len(),
            self.production.len() + self.cost_sheet.len()
        );

        let fx_override = self.fx_override;
        for product in self.all_products_mut() {
            product.update_material_cost(catalog, fx_override);
        }
    }

    /// 設定匯率覆蓋並以新匯率重新計價
    pub fn set_fx_override(
        &mut self,
        fx_override: Option<Decimal>,
        catalog: &MaterialPriceCatalog,
    ) {
        self.fx_override = fx_override;
        self.on_material_prices_changed(catalog);
    }

    /// 單一產品售價異動：只重算該產品的下游欄位
    pub fn on_sale_price_changed(
        &mut self,
        full_name: &str,
        price: Option<Decimal>,
        currency: Currency,
    ) -> Result<()> {
        self.find_mut(full_name)?.set_sale_price(price, currency);
        Ok(())
    }

    /// 單一產品時薪覆蓋異動：只重算該產品的下游欄位
    pub fn on_labor_rate_changed(&mut self, full_name: &str, rate: Decimal) -> Result<()> {
        self.find_mut(full_name)?.set_labor_rate(rate);
        Ok(())
    }

    fn collection_mut(&mut self, collection: ProductCollection) -> &mut Vec<Product> {
        match collection {
            ProductCollection::Production => &mut self.production,
            ProductCollection::CostSheet => &mut self.cost_sheet,
        }
    }

    fn all_products_mut(&mut self) -> impl Iterator<Item = &mut Product> {
        self.production.iter_mut().chain(self.cost_sheet.iter_mut())
    }

    fn find_mut(&mut self, full_name: &str) -> Result<&mut Product> {
        self.production
            .iter_mut()
            .chain(self.cost_sheet.iter_mut())
            .find(|p| p.full_name() == full_name)
            .ok_or_else(|| CostingError::ProductNotFound(full_name.to_string()))
    }
}
