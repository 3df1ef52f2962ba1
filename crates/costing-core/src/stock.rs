//! 庫存模型：原物料庫存帳、成品帳與領料紀錄

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 原物料庫存帳項目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItem {
    /// 物料名稱
    pub material: String,

    /// 現有量（kg）
    pub on_hand_kg: Decimal,

    /// 外幣單價
    pub unit_price_foreign: Decimal,

    /// 匯率快照
    pub fx_rate: Decimal,

    /// 最低庫存量（kg）
    pub min_stock_kg: Decimal,
}

impl StockItem {
    /// 創建新的庫存項目
    pub fn new(
        material: String,
        on_hand_kg: Decimal,
        unit_price_foreign: Decimal,
        fx_rate: Decimal,
    ) -> Self {
        Self {
            material,
            on_hand_kg,
            unit_price_foreign,
            fx_rate,
            min_stock_kg: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置最低庫存量
    pub fn with_min_stock(mut self, min_stock_kg: Decimal) -> Self {
        self.min_stock_kg = min_stock_kg;
        self
    }

    /// 檢查是否低於最低庫存
    pub fn is_below_minimum(&self) -> bool {
        self.on_hand_kg < self.min_stock_kg
    }
}

/// 原物料庫存帳
///
/// 以進帳順序保存項目；模糊匹配在同一規則內以此順序裁決平手。
/// 項目一經建立不會被隱式刪除，數量可以歸零。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockLedger {
    items: Vec<StockItem>,
}

impl StockLedger {
    /// 創建空的庫存帳
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// 進料：物料已存在（不分大小寫）則累加數量並更新價格快照，否則新增項目
    pub fn receive(
        &mut self,
        material: &str,
        kg: Decimal,
        unit_price_foreign: Decimal,
        fx_rate: Decimal,
    ) {
        match self.find_exact(material) {
            Some(index) => {
                let item = &mut self.items[index];
                item.on_hand_kg += kg;
                item.unit_price_foreign = unit_price_foreign;
                item.fx_rate = fx_rate;
            }
            None => {
                self.items.push(StockItem::new(
                    material.to_string(),
                    kg,
                    unit_price_foreign,
                    fx_rate,
                ));
            }
        }
    }

    /// 直接加入一筆庫存項目（保留進帳順序）
    pub fn push(&mut self, item: StockItem) {
        self.items.push(item);
    }

    /// 不分大小寫精確查找，返回帳上索引
    pub fn find_exact(&self, material: &str) -> Option<usize> {
        let needle = material.trim().to_lowercase();
        self.items
            .iter()
            .position(|item| item.material.trim().to_lowercase() == needle)
    }

    /// 依索引取得項目
    pub fn get(&self, index: usize) -> Option<&StockItem> {
        self.items.get(index)
    }

    /// 依索引扣帳
    ///
    /// 充足性檢核由呼叫端（完工扣帳流程的驗證階段）負責。
    pub fn deduct(&mut self, index: usize, kg: Decimal) {
        if let Some(item) = self.items.get_mut(index) {
            item.on_hand_kg -= kg;
        }
    }

    /// 所有項目（進帳順序）
    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    /// 帳上項目數
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 檢查是否為空
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 成品帳項目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedGood {
    /// 產品名稱
    pub product_name: String,

    /// 現有量（單位數）
    pub on_hand_qty: Decimal,

    /// 單位重量（kg）
    pub unit_weight_kg: Decimal,

    /// 混合單位生產成本（逐批完工按數量加權平均）
    pub unit_cost: Decimal,
}

impl FinishedGood {
    /// 創建新的成品帳項目
    pub fn new(
        product_name: String,
        on_hand_qty: Decimal,
        unit_weight_kg: Decimal,
        unit_cost: Decimal,
    ) -> Self {
        Self {
            product_name,
            on_hand_qty,
            unit_weight_kg,
            unit_cost,
        }
    }

    /// 併入新一批完工量，單位成本按數量加權平均
    pub fn absorb_batch(&mut self, qty: Decimal, unit_cost: Decimal) {
        let total = self.on_hand_qty + qty;
        if total > Decimal::ZERO {
            self.unit_cost =
                (self.on_hand_qty * self.unit_cost + qty * unit_cost) / total;
        }
        self.on_hand_qty = total;
    }
}

/// 成品帳
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinishedGoodsLedger {
    entries: Vec<FinishedGood>,
}

impl FinishedGoodsLedger {
    /// 創建空的成品帳
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 完工入帳：同名產品（不分大小寫）合併並加權平均成本，否則新增項目
    pub fn record_completion(
        &mut self,
        product_name: &str,
        qty: Decimal,
        unit_weight_kg: Decimal,
        unit_cost: Decimal,
    ) -> &FinishedGood {
        let index = match self.position(product_name) {
            Some(index) => {
                self.entries[index].absorb_batch(qty, unit_cost);
                index
            }
            None => {
                self.entries.push(FinishedGood::new(
                    product_name.to_string(),
                    qty,
                    unit_weight_kg,
                    unit_cost,
                ));
                self.entries.len() - 1
            }
        };
        &self.entries[index]
    }

    /// 依產品名稱查找（不分大小寫）
    pub fn find(&self, product_name: &str) -> Option<&FinishedGood> {
        self.position(product_name).map(|index| &self.entries[index])
    }

    /// 所有項目
    pub fn entries(&self) -> &[FinishedGood] {
        &self.entries
    }

    /// 帳上項目數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 檢查是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, product_name: &str) -> Option<usize> {
        let needle = product_name.trim().to_lowercase();
        self.entries
            .iter()
            .position(|entry| entry.product_name.trim().to_lowercase() == needle)
    }
}

/// 領料消耗紀錄：完工扣帳時逐配方行產生一筆
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    /// 紀錄ID
    pub id: Uuid,

    /// 實際扣帳的庫存項目名稱（匹配結果，可能與配方行名稱不同）
    pub material: String,

    /// 完工產品名稱
    pub product_name: String,

    /// 消耗量（kg）
    pub quantity_kg: Decimal,

    /// 完工日期（呼叫端提供，引擎不讀取時鐘）
    pub consumed_on: NaiveDate,
}

impl ConsumptionRecord {
    /// 創建新的領料紀錄
    pub fn new(
        material: String,
        product_name: String,
        quantity_kg: Decimal,
        consumed_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            material,
            product_name,
            quantity_kg,
            consumed_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receive_creates_and_merges() {
        let mut ledger = StockLedger::new();
        ledger.receive("Acero", Decimal::from(10), Decimal::from(2), Decimal::from(1000));
        ledger.receive("ACERO", Decimal::from(5), Decimal::from(3), Decimal::from(1100));

        assert_eq!(ledger.len(), 1);
        let item = ledger.get(0).unwrap();
        assert_eq!(item.on_hand_kg, Decimal::from(15));
        // 價格快照以最後一次進料為準
        assert_eq!(item.unit_price_foreign, Decimal::from(3));
        assert_eq!(item.fx_rate, Decimal::from(1100));
    }

    #[test]
    fn test_deduct_can_reach_zero() {
        let mut ledger = StockLedger::new();
        ledger.receive("Acero", Decimal::from(10), Decimal::from(2), Decimal::from(1000));
        ledger.deduct(0, Decimal::from(10));

        // 數量歸零但項目不會被刪除
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(0).unwrap().on_hand_kg, Decimal::ZERO);
    }

    #[test]
    fn test_below_minimum_stock() {
        let item = StockItem::new(
            "Acero".to_string(),
            Decimal::from(5),
            Decimal::from(2),
            Decimal::from(1000),
        )
        .with_min_stock(Decimal::from(20));

        assert!(item.is_below_minimum());
    }

    #[test]
    fn test_finished_goods_weighted_average() {
        let mut ledger = FinishedGoodsLedger::new();

        // 第一批：10 件，單位成本 100
        ledger.record_completion("Caño 20", Decimal::from(10), Decimal::new(5, 1), Decimal::from(100));
        // 第二批：30 件，單位成本 200
        let entry = ledger.record_completion(
            "caño 20",
            Decimal::from(30),
            Decimal::new(5, 1),
            Decimal::from(200),
        );

        // 加權平均：(10×100 + 30×200) / 40 = 175
        assert_eq!(entry.on_hand_qty, Decimal::from(40));
        assert_eq!(entry.unit_cost, Decimal::from(175));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_absorb_batch_with_zero_total_keeps_cost() {
        let mut good = FinishedGood::new(
            "Caño 20".to_string(),
            Decimal::ZERO,
            Decimal::new(5, 1),
            Decimal::from(100),
        );
        good.absorb_batch(Decimal::ZERO, Decimal::from(300));

        // 總量為零時不做除法，保留原成本
        assert_eq!(good.on_hand_qty, Decimal::ZERO);
        assert_eq!(good.unit_cost, Decimal::from(100));
    }
}
