//! 原物料成本計算

use costing_core::{BomLine, MaterialPriceCatalog, PriceSource};
use rust_decimal::Decimal;

/// 原物料成本計算器
pub struct MaterialCostCalculator;

impl MaterialCostCalculator {
    /// 計算每單位產品的原物料成本（本幣）
    ///
    /// 逐配方行計價後加總：
    /// - 手動覆蓋價：用量 × 覆蓋價（已為本幣），完全不經目錄與匯率
    /// - 目錄計價：目錄缺價時該行貢獻為 0（沿用既有的寬鬆行為，屬文件化特性）；
    ///   有價時為用量 × 外幣單價 × 匯率，匯率優先取正值的 `fx_override`，
    ///   否則取該物料自身的匯率快照
    ///
    /// 迴圈內不做任何進位，顯示層如需進位由呼叫端處理。
    pub fn compute(
        bom: &[BomLine],
        catalog: &MaterialPriceCatalog,
        fx_override: Option<Decimal>,
    ) -> Decimal {
        bom.iter()
            .map(|line| Self::line_cost(line, catalog, fx_override))
            .sum()
    }

    /// 單一配方行的本幣成本貢獻
    fn line_cost(
        line: &BomLine,
        catalog: &MaterialPriceCatalog,
        fx_override: Option<Decimal>,
    ) -> Decimal {
        match line.price_source {
            PriceSource::Manual(local_price) => line.kg_per_unit * local_price,
            PriceSource::Catalog => match catalog.get(&line.material) {
                None => Decimal::ZERO,
                Some(price) => {
                    let fx = match fx_override {
                        Some(rate) if rate > Decimal::ZERO => rate,
                        _ => price.fx_rate,
                    };
                    line.kg_per_unit * price.unit_price_foreign * fx
                }
            },
        }
    }
}
