//! 產品配方（Bill of Materials）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 配方行的價格來源
///
/// 每行明確標記計價方式，解析時不依賴欄位是否存在的隱式判斷。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PriceSource {
    /// 依價格目錄計價（外幣單價 × 匯率）
    Catalog,

    /// 手動覆蓋價（已為本幣），該行完全繞過目錄與匯率
    Manual(Decimal),
}

/// 配方行：生產一單位產品所需的單一原物料用量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomLine {
    /// 原物料名稱
    pub material: String,

    /// 每單位產品用量（kg）
    pub kg_per_unit: Decimal,

    /// 價格來源
    pub price_source: PriceSource,
}

impl BomLine {
    /// 創建依目錄計價的配方行
    pub fn catalog(material: String, kg_per_unit: Decimal) -> Self {
        Self {
            material,
            kg_per_unit,
            price_source: PriceSource::Catalog,
        }
    }

    /// 創建手動覆蓋價（本幣）的配方行
    pub fn manual(material: String, kg_per_unit: Decimal, local_price: Decimal) -> Self {
        Self {
            material,
            kg_per_unit,
            price_source: PriceSource::Manual(local_price),
        }
    }

    /// 檢查該行是否為手動覆蓋價
    pub fn has_manual_price(&self) -> bool {
        matches!(self.price_source, PriceSource::Manual(_))
    }
}
