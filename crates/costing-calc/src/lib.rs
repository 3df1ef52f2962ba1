//! # Costing Calculation Engine
//!
//! 成本計算引擎：勞動指數、原物料成本、獲利能力與級聯重算

pub mod coordinator;
pub mod employee;
pub mod labor_index;
pub mod material_cost;
pub mod product;
pub mod profitability;

// Re-export 主要類型
pub use coordinator::{ProductCollection, RecalculationCoordinator};
pub use employee::Employee;
pub use labor_index::{
    IncidenceColumn, LaborIndexBreakdown, LaborIndexCalculator, LaborInputs,
};
pub use material_cost::MaterialCostCalculator;
pub use product::{Product, ProductCosting};
pub use profitability::{ProfitabilityCalculator, ProfitabilityResult};
