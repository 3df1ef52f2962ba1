//! 員工實體
//!
//! 持有出勤/薪資輸入並快取完整的勞動指數明細。
//! 衍生欄位一律經命名更新操作重算，外部無法直接指定，
//! 因此實際時薪成本恆為輸入的純函數且非負。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::labor_index::{LaborIndexBreakdown, LaborIndexCalculator, LaborInputs};

/// 員工
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// 姓名（名冊中的識別用）
    pub name: String,

    inputs: LaborInputs,

    breakdown: LaborIndexBreakdown,
}

impl Employee {
    /// 創建員工並立即完成全量推導
    pub fn new(name: String, inputs: LaborInputs) -> Self {
        let breakdown = LaborIndexCalculator::compute(&inputs);
        Self {
            name,
            inputs,
            breakdown,
        }
    }

    /// 當前輸入紀錄
    pub fn inputs(&self) -> &LaborInputs {
        &self.inputs
    }

    /// 勞動指數完整明細
    pub fn breakdown(&self) -> &LaborIndexBreakdown {
        &self.breakdown
    }

    /// 實際時薪成本
    pub fn effective_hourly_cost(&self) -> Decimal {
        self.breakdown.effective_hourly_cost
    }

    /// 更新時薪並重算
    pub fn set_hourly_wage(&mut self, wage: Decimal) {
        self.inputs.hourly_wage = wage;
        self.recompute();
    }

    /// 更新每班工時並重算
    pub fn set_hours_per_shift(&mut self, hours: Decimal) {
        self.inputs.hours_per_shift = hours;
        self.recompute();
    }

    /// 更新社會保險費率並重算
    pub fn set_social_charge_pct(&mut self, pct: Decimal) {
        self.inputs.social_charge_pct = pct;
        self.recompute();
    }

    /// 整批替換輸入並重算
    pub fn update_inputs(&mut self, inputs: LaborInputs) {
        self.inputs = inputs;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.breakdown = LaborIndexCalculator::compute(&self.inputs);
    }
}
