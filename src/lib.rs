//! # Costing
//!
//! 製造成本分攤與獲利能力重算引擎：
//! 原物料價格、由出勤/薪資輸入推導的勞動成本指數與產線產能
//! 共同決定單位/批次成本、稅負與淨獲利，
//! 上游輸入（員工名冊、物料價格、匯率、售價）異動時
//! 由級聯重算協調器維持所有衍生欄位一致。

// Re-export 主要類型
pub use costing_calc::{
    Employee, IncidenceColumn, LaborIndexBreakdown, LaborIndexCalculator, LaborInputs,
    MaterialCostCalculator, Product, ProductCollection, ProductCosting,
    ProfitabilityCalculator, ProfitabilityResult, RecalculationCoordinator,
};
pub use costing_core::{
    BomLine, ConsumptionRecord, CostingError, Currency, FinishedGood, FinishedGoodsLedger,
    MaterialPrice, MaterialPriceCatalog, PriceSource, Result, Shortfall, ShortfallReport,
    StockItem, StockLedger,
};
pub use costing_stock::{CompletionReceipt, StockConsumptionMatcher, StockMatcher};
