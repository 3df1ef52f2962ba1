//! 生產完工的庫存扣帳
//!
//! 每張完工請求經 Requested → Validated → Committed，
//! 或 Requested → Rejected（附逐行短缺報告）。
//! 驗證階段不做任何帳面異動，整張請求全有或全無；
//! Rejected 為終態，補料後由呼叫端重新送件，引擎內部不重試。

use chrono::NaiveDate;
use costing_calc::Product;
use costing_core::{
    ConsumptionRecord, CostingError, FinishedGood, FinishedGoodsLedger, Result, Shortfall,
    ShortfallReport, StockLedger,
};
use rust_decimal::Decimal;

use crate::matching::StockMatcher;

/// 完工入帳回執
#[derive(Debug, Clone)]
pub struct CompletionReceipt {
    /// 完工產品名稱
    pub product_name: String,

    /// 完工數量
    pub quantity: Decimal,

    /// 逐配方行的領料紀錄
    pub consumptions: Vec<ConsumptionRecord>,

    /// 合併後的成品帳項目快照
    pub finished: FinishedGood,
}

/// 庫存扣帳匹配器
pub struct StockConsumptionMatcher;

impl StockConsumptionMatcher {
    /// 產品完工：整張配方驗證充足後原子扣帳並完工入帳
    ///
    /// 同步且決定性的單一流程；若由並行宿主嵌入，
    /// 驗證到提交必須整段放在同一臨界區內串行執行。
    pub fn complete_production(
        product: &Product,
        quantity: Decimal,
        completed_on: NaiveDate,
        stock: &mut StockLedger,
        finished: &mut FinishedGoodsLedger,
    ) -> Result<CompletionReceipt> {
        let product_name = product.full_name();

        if quantity <= Decimal::ZERO {
            return Err(CostingError::InvalidQuantity(format!(
                "產品 {} 的完工數量必須為正值，收到 {}",
                product_name, quantity
            )));
        }

        tracing::info!(
            "完工請求：產品 {}，數量 {}，配方 {} 行",
            product_name,
            quantity,
            product.bom().len()
        );

        // Validated：逐行解析物料並檢核充足性。
        // 多行解析到同一帳面項目時需求先加總，避免逐行各自通過卻合計超扣。
        let mut line_matches: Vec<(usize, Decimal)> = Vec::new();
        let mut totals_by_entry: Vec<(usize, Decimal)> = Vec::new();
        let mut shortfalls: Vec<Shortfall> = Vec::new();

        for line in product.bom() {
            let required = line.kg_per_unit * quantity;
            match StockMatcher::resolve(&line.material, stock) {
                None => shortfalls.push(Shortfall {
                    material: line.material.clone(),
                    required_kg: required,
                    available_kg: Decimal::ZERO,
                }),
                Some(index) => {
                    line_matches.push((index, required));
                    match totals_by_entry.iter_mut().find(|(i, _)| *i == index) {
                        Some((_, total)) => *total += required,
                        None => totals_by_entry.push((index, required)),
                    }
                }
            }
        }

        for &(index, total_required) in &totals_by_entry {
            let item = &stock.items()[index];
            if item.on_hand_kg < total_required {
                shortfalls.push(Shortfall {
                    material: item.material.clone(),
                    required_kg: total_required,
                    available_kg: item.on_hand_kg,
                });
            }
        }

        if !shortfalls.is_empty() {
            tracing::info!(
                "完工請求遭拒：產品 {}，{} 項物料短缺",
                product_name,
                shortfalls.len()
            );
            return Err(CostingError::StockShortfall(ShortfallReport {
                product_name,
                shortfalls,
            }));
        }

        // Committed：逐行扣帳並產生領料紀錄
        let mut consumptions = Vec::with_capacity(line_matches.len());
        for (index, required) in line_matches {
            let material = stock.items()[index].material.clone();
            stock.deduct(index, required);
            tracing::debug!("扣帳 {}：{} kg", material, required);
            consumptions.push(ConsumptionRecord::new(
                material,
                product_name.clone(),
                required,
                completed_on,
            ));
        }

        // 成品入帳：以本批基礎單位成本與帳上既有批次按數量加權平均
        let finished_entry = finished
            .record_completion(
                &product_name,
                quantity,
                product.unit_weight_kg(),
                product.costing().base_unit_cost,
            )
            .clone();

        tracing::info!(
            "完工入帳：產品 {}，數量 {}，混合單位成本 {}",
            product_name,
            quantity,
            finished_entry.unit_cost
        );

        Ok(CompletionReceipt {
            product_name,
            quantity,
            consumptions,
            finished: finished_entry,
        })
    }
}
