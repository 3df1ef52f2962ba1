//! 勞動指數計算
//!
//! 由出勤與薪資輸入推導調整指數與實際時薪成本：
//! 先計算年度應付天數與各類工時，再以「應付總工時」為分母
//! 展開兩欄九項的佔比明細（基本 jornal 與含社會保險負擔），
//! 兩欄各自提列 SAC（年終獎金，小計 / 12）後合計為調整指數。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 年度工作日常數
pub const WORKING_DAYS_PER_YEAR: u32 = 261;

/// 勞動指數輸入
///
/// 全部為必填數值欄位；型別與範圍檢核由呼叫端負責，計算本身為全域函數。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaborInputs {
    /// 原始時薪
    pub hourly_wage: Decimal,

    /// 實際出勤天數（保留於紀錄，不參與指數計算）
    pub days_worked: Decimal,

    /// 每班工時
    pub hours_per_shift: Decimal,

    /// 曠職天數
    pub absence_days: Decimal,

    /// 特休天數
    pub vacation_days: Decimal,

    /// 國定假日天數
    pub holiday_days: Decimal,

    /// 病假天數
    pub sick_days: Decimal,

    /// 其他假別天數
    pub other_leave_days: Decimal,

    /// 每班休息工時（不計入生產工時，仍計入應付工時）
    pub rest_hours_per_shift: Decimal,

    /// 社會保險費率（%）
    pub social_charge_pct: Decimal,

    /// 加班工時（以 1.5 倍計）
    pub overtime_hours: Decimal,

    /// 假日出勤天數（以 2.0 倍計）
    pub worked_holidays: Decimal,
}

impl LaborInputs {
    /// 創建新的勞動指數輸入（其餘欄位皆為 0）
    pub fn new(hourly_wage: Decimal, hours_per_shift: Decimal) -> Self {
        Self {
            hourly_wage,
            hours_per_shift,
            ..Default::default()
        }
    }

    /// 建構器模式：設置實際出勤天數
    pub fn with_days_worked(mut self, days: Decimal) -> Self {
        self.days_worked = days;
        self
    }

    /// 建構器模式：設置曠職天數
    pub fn with_absences(mut self, days: Decimal) -> Self {
        self.absence_days = days;
        self
    }

    /// 建構器模式：設置特休天數
    pub fn with_vacation(mut self, days: Decimal) -> Self {
        self.vacation_days = days;
        self
    }

    /// 建構器模式：設置國定假日天數
    pub fn with_holidays(mut self, days: Decimal) -> Self {
        self.holiday_days = days;
        self
    }

    /// 建構器模式：設置病假天數
    pub fn with_sick_leave(mut self, days: Decimal) -> Self {
        self.sick_days = days;
        self
    }

    /// 建構器模式：設置其他假別天數
    pub fn with_other_leave(mut self, days: Decimal) -> Self {
        self.other_leave_days = days;
        self
    }

    /// 建構器模式：設置每班休息工時
    pub fn with_rest_hours(mut self, hours: Decimal) -> Self {
        self.rest_hours_per_shift = hours;
        self
    }

    /// 建構器模式：設置社會保險費率（%）
    pub fn with_social_charge(mut self, pct: Decimal) -> Self {
        self.social_charge_pct = pct;
        self
    }

    /// 建構器模式：設置加班工時
    pub fn with_overtime(mut self, hours: Decimal) -> Self {
        self.overtime_hours = hours;
        self
    }

    /// 建構器模式：設置假日出勤天數
    pub fn with_worked_holidays(mut self, days: Decimal) -> Self {
        self.worked_holidays = days;
        self
    }
}

/// 單欄九項佔比明細（%）
///
/// 加班項已含 1.5 倍、假日出勤項已含 2.0 倍；
/// `subtotal` 為九項之和，`sac` 為小計 / 12，`total` 為小計 + SAC。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidenceColumn {
    /// 生產工時
    pub productive: Decimal,
    /// 國定假日
    pub holidays: Decimal,
    /// 特休
    pub vacation: Decimal,
    /// 病假
    pub sick_leave: Decimal,
    /// 其他假別
    pub other_leave: Decimal,
    /// 曠職
    pub absences: Decimal,
    /// 休息工時
    pub rest: Decimal,
    /// 加班（含 1.5 倍）
    pub overtime: Decimal,
    /// 假日出勤（含 2.0 倍）
    pub worked_holidays: Decimal,
    /// 小計
    pub subtotal: Decimal,
    /// SAC 提列（小計 / 12）
    pub sac: Decimal,
    /// 合計（小計 + SAC）
    pub total: Decimal,
}

impl IncidenceColumn {
    /// 由九項佔比彙總小計、SAC 與合計
    fn aggregate(&mut self) {
        self.subtotal = self.productive
            + self.holidays
            + self.vacation
            + self.sick_leave
            + self.other_leave
            + self.absences
            + self.rest
            + self.overtime
            + self.worked_holidays;
        self.sac = self.subtotal / Decimal::from(12);
        self.total = self.subtotal + self.sac;
    }

    /// 以社會保險費率縮放整欄並重新彙總
    fn loaded(&self, social_charge_pct: Decimal) -> Self {
        let factor = social_charge_pct / Decimal::ONE_HUNDRED;
        let mut column = Self {
            productive: self.productive * factor,
            holidays: self.holidays * factor,
            vacation: self.vacation * factor,
            sick_leave: self.sick_leave * factor,
            other_leave: self.other_leave * factor,
            absences: self.absences * factor,
            rest: self.rest * factor,
            overtime: self.overtime * factor,
            worked_holidays: self.worked_holidays * factor,
            ..Default::default()
        };
        column.aggregate();
        column
    }
}

/// 勞動指數完整明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborIndexBreakdown {
    /// 應付天數（261 − 各類缺勤天數）
    pub payable_days: Decimal,

    /// 生產工時（應付天數 ×（每班工時 − 休息工時））
    pub productive_hours: Decimal,

    /// 應付總工時（應付天數 × 每班工時，所有佔比的分母）
    pub total_payable_hours: Decimal,

    /// 國定假日工時
    pub holiday_hours: Decimal,

    /// 特休工時
    pub vacation_hours: Decimal,

    /// 病假工時
    pub sick_hours: Decimal,

    /// 其他假別工時
    pub other_leave_hours: Decimal,

    /// 曠職工時
    pub absence_hours: Decimal,

    /// 休息工時（應付天數 × 每班休息工時）
    pub rest_hours: Decimal,

    /// 第一欄：基本 jornal
    pub base: IncidenceColumn,

    /// 第二欄：含社會保險負擔
    pub loaded: IncidenceColumn,

    /// 調整指數（兩欄合計之和）
    pub adjustment_index: Decimal,

    /// 實際時薪成本（時薪 × 調整指數 / 100，四捨五入至 5 位小數）
    pub effective_hourly_cost: Decimal,
}

/// 勞動指數計算器
pub struct LaborIndexCalculator;

impl LaborIndexCalculator {
    /// 計算勞動指數明細
    ///
    /// 純函數、全域函數：應付總工時為零時所有佔比一律取 0，不做除法。
    pub fn compute(inputs: &LaborInputs) -> LaborIndexBreakdown {
        let payable_days = Decimal::from(WORKING_DAYS_PER_YEAR)
            - (inputs.absence_days
                + inputs.vacation_days
                + inputs.holiday_days
                + inputs.sick_days
                + inputs.other_leave_days);

        let productive_hours =
            payable_days * (inputs.hours_per_shift - inputs.rest_hours_per_shift);
        let total_payable_hours = payable_days * inputs.hours_per_shift;

        // 各假別以整日折算工時；休息工時依應付天數折算，加班直接以工時計
        let holiday_hours = inputs.holiday_days * inputs.hours_per_shift;
        let vacation_hours = inputs.vacation_days * inputs.hours_per_shift;
        let sick_hours = inputs.sick_days * inputs.hours_per_shift;
        let other_leave_hours = inputs.other_leave_days * inputs.hours_per_shift;
        let absence_hours = inputs.absence_days * inputs.hours_per_shift;
        let rest_hours = payable_days * inputs.rest_hours_per_shift;
        let overtime_hours = inputs.overtime_hours;
        let worked_holiday_hours = inputs.worked_holidays * inputs.hours_per_shift;

        let ratio = |hours: Decimal| -> Decimal {
            if total_payable_hours <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                hours / total_payable_hours * Decimal::ONE_HUNDRED
            }
        };

        let mut base = IncidenceColumn {
            productive: Decimal::ONE_HUNDRED,
            holidays: ratio(holiday_hours),
            vacation: ratio(vacation_hours),
            sick_leave: ratio(sick_hours),
            other_leave: ratio(other_leave_hours),
            absences: ratio(absence_hours),
            rest: ratio(rest_hours),
            overtime: ratio(overtime_hours) * Decimal::new(15, 1),
            worked_holidays: ratio(worked_holiday_hours) * Decimal::TWO,
            ..Default::default()
        };
        base.aggregate();

        let loaded = base.loaded(inputs.social_charge_pct);

        let adjustment_index = base.total + loaded.total;
        let effective_hourly_cost =
            (inputs.hourly_wage * adjustment_index / Decimal::ONE_HUNDRED).round_dp(5);

        LaborIndexBreakdown {
            payable_days,
            productive_hours,
            total_payable_hours,
            holiday_hours,
            vacation_hours,
            sick_hours,
            other_leave_hours,
            absence_hours,
            rest_hours,
            base,
            loaded,
            adjustment_index,
            effective_hourly_cost,
        }
    }
}
