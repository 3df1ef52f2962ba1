//! 幣別標記

use serde::{Deserialize, Serialize};

/// 售價幣別
///
/// 引擎只區分本幣與一種外幣參考幣，不支援任意多幣別。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// 本幣
    Local,
    /// 外幣參考幣
    Foreign,
}

impl Currency {
    /// 檢查是否為外幣
    pub fn is_foreign(&self) -> bool {
        *self == Currency::Foreign
    }
}
