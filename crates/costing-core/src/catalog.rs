//! 原物料價格目錄

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 單一原物料的價格快照
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialPrice {
    /// 外幣單價（每 kg）
    pub unit_price_foreign: Decimal,

    /// 該物料自身的匯率快照
    pub fx_rate: Decimal,
}

/// 原物料價格目錄
///
/// 純查詢結構：物料名稱 → 價格快照，本身不含任何計算邏輯。
/// 名稱在寫入與查詢時一律正規化（去頭尾空白、轉小寫），查詢不分大小寫。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialPriceCatalog {
    entries: HashMap<String, MaterialPrice>,
}

impl MaterialPriceCatalog {
    /// 創建空的價格目錄
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 寫入（或覆蓋）一筆物料價格
    pub fn insert(&mut self, material: &str, unit_price_foreign: Decimal, fx_rate: Decimal) {
        self.entries.insert(
            normalize(material),
            MaterialPrice {
                unit_price_foreign,
                fx_rate,
            },
        );
    }

    /// 建構器模式：設置一筆物料價格
    pub fn with_price(
        mut self,
        material: &str,
        unit_price_foreign: Decimal,
        fx_rate: Decimal,
    ) -> Self {
        self.insert(material, unit_price_foreign, fx_rate);
        self
    }

    /// 查詢物料價格（不分大小寫）
    pub fn get(&self, material: &str) -> Option<&MaterialPrice> {
        self.entries.get(&normalize(material))
    }

    /// 檢查物料是否在目錄中
    pub fn contains(&self, material: &str) -> bool {
        self.entries.contains_key(&normalize(material))
    }

    /// 目錄筆數
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 檢查目錄是否為空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 名稱正規化：去頭尾空白、轉小寫
fn normalize(material: &str) -> String {
    material.trim().to_lowercase()
}
