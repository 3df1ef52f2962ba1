//! 獲利能力計算

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 獲利能力計算結果
///
/// 無售價時淨獲利為 `None`：「無法計算」是明確狀態，絕不以 0 充當。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfitabilityResult {
    /// 基礎單位成本（原物料 + 人工，不含稅）
    pub base_unit_cost: Decimal,

    /// 單位稅額（IIBB，按售價計而非按成本計）
    pub unit_tax: Decimal,

    /// 總稅額
    pub total_tax: Decimal,

    /// 淨單位獲利（售價 − 基礎成本 − 單位稅額）
    pub net_unit_profit: Option<Decimal>,

    /// 淨總獲利（淨單位獲利 × 數量）
    pub net_total_profit: Option<Decimal>,
}

/// 獲利能力計算器
pub struct ProfitabilityCalculator;

impl ProfitabilityCalculator {
    /// 計算單位與總體獲利
    ///
    /// `sale_price` 必須已為本幣；外幣售價的換算由呼叫端先行完成，
    /// 換算採用與原物料成本相同的匯率語意，此處不重複實作。
    pub fn compute(
        unit_material_cost: Decimal,
        unit_labor_cost: Decimal,
        sale_price: Option<Decimal>,
        tax_pct: Decimal,
        quantity: Decimal,
    ) -> ProfitabilityResult {
        let base_unit_cost = unit_material_cost + unit_labor_cost;

        let unit_tax = match sale_price {
            Some(price) if tax_pct > Decimal::ZERO => {
                price * tax_pct / Decimal::ONE_HUNDRED
            }
            _ => Decimal::ZERO,
        };
        let total_tax = unit_tax * quantity;

        let net_unit_profit = sale_price.map(|price| price - base_unit_cost - unit_tax);
        let net_total_profit = net_unit_profit.map(|profit| profit * quantity);

        ProfitabilityResult {
            base_unit_cost,
            unit_tax,
            total_tax,
            net_unit_profit,
            net_total_profit,
        }
    }
}
