//! # Costing Stock
//!
//! 庫存名稱匹配與完工扣帳

pub mod consumption;
pub mod matching;

// Re-export 主要類型
pub use consumption::{CompletionReceipt, StockConsumptionMatcher};
pub use matching::StockMatcher;
