//! # Costing Core
//!
//! 核心資料模型與類型定義

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod bom;
pub mod catalog;
pub mod currency;
pub mod stock;

// Re-export 主要類型
pub use bom::{BomLine, PriceSource};
pub use catalog::{MaterialPrice, MaterialPriceCatalog};
pub use currency::Currency;
pub use stock::{
    ConsumptionRecord, FinishedGood, FinishedGoodsLedger, StockItem, StockLedger,
};

/// 成本引擎錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CostingError {
    #[error("找不到產品: {0}")]
    ProductNotFound(String),

    #[error("無效的生產數量: {0}")]
    InvalidQuantity(String),

    #[error("庫存不足: 產品 {} 共 {} 項物料短缺", .0.product_name, .0.shortfalls.len())]
    StockShortfall(ShortfallReport),

    #[error("其他錯誤: {0}")]
    Other(String),
}

/// 單一配方行的短缺明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortfall {
    /// 配方行（或帳上）的物料名稱
    pub material: String,

    /// 需求量（kg）
    pub required_kg: Decimal,

    /// 可用量（kg，未匹配到任何庫存項目時為 0）
    pub available_kg: Decimal,
}

/// 庫存短缺報告：整張完工請求的逐行明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortfallReport {
    /// 完工產品名稱
    pub product_name: String,

    /// 短缺明細
    pub shortfalls: Vec<Shortfall>,
}

pub type Result<T> = std::result::Result<T, CostingError>;
