//! 產品實體
//!
//! 持有配方與完整的衍生成本快取。所有衍生欄位都是
//! 輸入 + 當前價格目錄 + 當前名冊平均時薪的純函數，
//! 僅經命名更新操作重算，重算一律從當前輸入全量推導。

use costing_core::{BomLine, Currency, MaterialPriceCatalog};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::material_cost::MaterialCostCalculator;
use crate::profitability::ProfitabilityCalculator;

/// 產品衍生成本快取
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCosting {
    /// 每公斤單位數（1 / 單位重量）
    pub units_per_kg: Decimal,

    /// 單位原物料成本
    pub unit_material_cost: Decimal,

    /// 總原物料成本（單位 × 數量）
    pub total_material_cost: Decimal,

    /// 所需工時（數量 / 每小時產量）
    pub hours_required: Decimal,

    /// 單位人工成本（所需工時 × 實際時薪 / 數量）
    pub unit_labor_cost: Decimal,

    /// 基礎單位成本（原物料 + 人工，不含稅）
    pub base_unit_cost: Decimal,

    /// 單位稅額（IIBB）
    pub unit_tax: Decimal,

    /// 總稅額
    pub total_tax: Decimal,

    /// 淨單位獲利（無售價時為 None）
    pub net_unit_profit: Option<Decimal>,

    /// 淨總獲利
    pub net_total_profit: Option<Decimal>,
}

/// 產品
///
/// 識別為（系列、規格、特性）三段組合名，同一集合內必須唯一，
/// 級聯重算依此定位單一產品。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品系列
    pub family: String,

    /// 規格
    pub size: String,

    /// 特性
    pub feature: String,

    unit_weight_kg: Decimal,

    quantity: Decimal,

    units_per_hour: Decimal,

    sale_price: Option<Decimal>,

    sale_currency: Currency,

    tax_pct: Decimal,

    /// 最近一次套用的匯率覆蓋（外幣售價換算也使用它）
    fx_override: Option<Decimal>,

    /// 目前套用的實際時薪（由協調器推送）
    labor_rate: Decimal,

    bom: Vec<BomLine>,

    costing: ProductCosting,
}

impl Product {
    /// 創建產品並立即完成全量推導
    ///
    /// 尚未套用價格目錄前，目錄計價的配方行貢獻為 0；
    /// 加入協調器後會以當前目錄與平均時薪重算。
    pub fn new(
        family: String,
        size: String,
        feature: String,
        unit_weight_kg: Decimal,
        quantity: Decimal,
        units_per_hour: Decimal,
        bom: Vec<BomLine>,
    ) -> Self {
        let mut product = Self {
            family,
            size,
            feature,
            unit_weight_kg,
            quantity,
            units_per_hour,
            sale_price: None,
            sale_currency: Currency::Local,
            tax_pct: Decimal::ZERO,
            fx_override: None,
            labor_rate: Decimal::ZERO,
            bom,
            costing: ProductCosting::default(),
        };
        product.derive_downstream();
        product
    }

    /// 建構器模式：設置售價與幣別
    pub fn with_sale_price(mut self, price: Decimal, currency: Currency) -> Self {
        self.sale_price = Some(price);
        self.sale_currency = currency;
        self.derive_downstream();
        self
    }

    /// 建構器模式：設置 IIBB 稅率（%）
    pub fn with_tax_pct(mut self, tax_pct: Decimal) -> Self {
        self.tax_pct = tax_pct;
        self.derive_downstream();
        self
    }

    /// 完整組合名（略過空白段）
    pub fn full_name(&self) -> String {
        [&self.family, &self.size, &self.feature]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 衍生成本快取
    pub fn costing(&self) -> &ProductCosting {
        &self.costing
    }

    /// 配方
    pub fn bom(&self) -> &[BomLine] {
        &self.bom
    }

    /// 生產數量
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// 單位重量（kg）
    pub fn unit_weight_kg(&self) -> Decimal {
        self.unit_weight_kg
    }

    /// 售價（原幣別）
    pub fn sale_price(&self) -> Option<Decimal> {
        self.sale_price
    }

    /// 售價幣別
    pub fn sale_currency(&self) -> Currency {
        self.sale_currency
    }

    /// IIBB 稅率（%）
    pub fn tax_pct(&self) -> Decimal {
        self.tax_pct
    }

    /// 目前套用的實際時薪
    pub fn labor_rate(&self) -> Decimal {
        self.labor_rate
    }

    /// 重算原物料成本並連帶重算所有下游欄位
    ///
    /// `fx_override` 會被記住，之後的外幣售價換算沿用同一匯率語意。
    pub fn update_material_cost(
        &mut self,
        catalog: &MaterialPriceCatalog,
        fx_override: Option<Decimal>,
    ) {
        self.fx_override = fx_override;
        self.costing.unit_material_cost =
            MaterialCostCalculator::compute(&self.bom, catalog, fx_override);
        self.derive_downstream();
    }

    /// 套用新的實際時薪並重算人工、基礎成本、稅額與獲利
    pub fn set_labor_rate(&mut self, rate: Decimal) {
        self.labor_rate = rate;
        self.derive_downstream();
    }

    /// 更新售價並重算下游欄位
    pub fn set_sale_price(&mut self, price: Option<Decimal>, currency: Currency) {
        self.sale_price = price;
        self.sale_currency = currency;
        self.derive_downstream();
    }

    /// 更新 IIBB 稅率並重算下游欄位
    pub fn set_tax_pct(&mut self, tax_pct: Decimal) {
        self.tax_pct = tax_pct;
        self.derive_downstream();
    }

    /// 更新生產數量並重算下游欄位
    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.derive_downstream();
    }

    /// 更新每小時產量並重算下游欄位
    pub fn set_units_per_hour(&mut self, units_per_hour: Decimal) {
        self.units_per_hour = units_per_hour;
        self.derive_downstream();
    }

    /// 更新單位重量並重算下游欄位
    pub fn set_unit_weight(&mut self, unit_weight_kg: Decimal) {
        self.unit_weight_kg = unit_weight_kg;
        self.derive_downstream();
    }

    /// 替換配方並以指定目錄重新計價
    pub fn set_bom(
        &mut self,
        bom: Vec<BomLine>,
        catalog: &MaterialPriceCatalog,
        fx_override: Option<Decimal>,
    ) {
        self.bom = bom;
        self.update_material_cost(catalog, fx_override);
    }

    /// 售價換算為本幣：外幣售價以正值的匯率覆蓋換算，否則按原值採用
    fn local_sale_price(&self) -> Option<Decimal> {
        self.sale_price.map(|price| match (self.sale_currency, self.fx_override) {
            (Currency::Foreign, Some(fx)) if fx > Decimal::ZERO => price * fx,
            _ => price,
        })
    }

    /// 由當前輸入與已計價的原物料成本全量推導所有下游欄位
    fn derive_downstream(&mut self) {
        self.costing.units_per_kg = safe_div(Decimal::ONE, self.unit_weight_kg);
        self.costing.total_material_cost =
            self.costing.unit_material_cost * self.quantity;
        self.costing.hours_required = safe_div(self.quantity, self.units_per_hour);
        self.costing.unit_labor_cost = if self.quantity > Decimal::ZERO {
            self.costing.hours_required * self.labor_rate / self.quantity
        } else {
            Decimal::ZERO
        };

        let result = ProfitabilityCalculator::compute(
            self.costing.unit_material_cost,
            self.costing.unit_labor_cost,
            self.local_sale_price(),
            self.tax_pct,
            self.quantity,
        );
        self.costing.base_unit_cost = result.base_unit_cost;
        self.costing.unit_tax = result.unit_tax;
        self.costing.total_tax = result.total_tax;
        self.costing.net_unit_profit = result.net_unit_profit;
        self.costing.net_total_profit = result.net_total_profit;
    }
}

/// 除法保護：分母非正值時一律取 0，不產生 NaN/∞ 也不 panic
fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        numerator / denominator
    } else {
        Decimal::ZERO
    }
}
