//! 庫存名稱匹配策略
//!
//! 純函數的有序規則匹配，獨立於扣帳交易之外，
//! 其決定性與平手裁決可以單獨驗證。

use costing_core::StockLedger;

/// 庫存名稱匹配器
///
/// 規則依序嘗試，先命中的規則為準；同一規則內取最小帳上索引裁決平手。
/// 對相同帳面狀態的重複解析永遠得到相同結果。
pub struct StockMatcher;

impl StockMatcher {
    /// 將配方行的物料名稱解析為庫存帳索引
    ///
    /// 規則順序：
    /// 1. 不分大小寫精確匹配
    /// 2. 空白正規化後的雙向包含匹配
    /// 3. 首段（第一個分隔符前的系列名）相等匹配
    pub fn resolve(material: &str, ledger: &StockLedger) -> Option<usize> {
        Self::match_exact(material, ledger)
            .or_else(|| Self::match_containment(material, ledger))
            .or_else(|| Self::match_family(material, ledger))
    }

    /// 規則一：不分大小寫精確匹配
    fn match_exact(material: &str, ledger: &StockLedger) -> Option<usize> {
        ledger.find_exact(material)
    }

    /// 規則二：空白正規化後，任一方向包含即命中
    fn match_containment(material: &str, ledger: &StockLedger) -> Option<usize> {
        let needle = normalize(material);
        if needle.is_empty() {
            return None;
        }
        ledger.items().iter().position(|item| {
            let name = normalize(&item.material);
            !name.is_empty() && (name.contains(&needle) || needle.contains(&name))
        })
    }

    /// 規則三：首段系列名相等
    fn match_family(material: &str, ledger: &StockLedger) -> Option<usize> {
        let family = family_segment(material);
        if family.is_empty() {
            return None;
        }
        ledger
            .items()
            .iter()
            .position(|item| family_segment(&item.material) == family)
    }
}

/// 轉小寫並壓縮連續空白
fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// 取第一個分隔符（空白、`-`、`_`）之前的首段，轉小寫
fn family_segment(name: &str) -> String {
    name.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .next()
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use costing_core::StockItem;
    use rust_decimal::Decimal;

    fn item(name: &str) -> StockItem {
        StockItem::new(
            name.to_string(),
            Decimal::from(10),
            Decimal::ONE,
            Decimal::from(1000),
        )
    }

    fn ledger(names: &[&str]) -> StockLedger {
        let mut ledger = StockLedger::new();
        for name in names {
            ledger.push(item(name));
        }
        ledger
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        let ledger = ledger(&["Acero Inoxidable", "Polietileno"]);

        assert_eq!(StockMatcher::resolve("ACERO INOXIDABLE", &ledger), Some(0));
        assert_eq!(StockMatcher::resolve("polietileno", &ledger), Some(1));
    }

    #[test]
    fn test_exact_beats_containment() {
        // "Acero" 精確命中第二項，即使第一項也包含 "acero"
        let ledger = ledger(&["Acero Inoxidable", "Acero"]);

        assert_eq!(StockMatcher::resolve("acero", &ledger), Some(1));
    }

    #[test]
    fn test_containment_both_directions() {
        let ledger = ledger(&["Acero Inoxidable 304"]);

        // 查詢名包含於帳上名
        assert_eq!(StockMatcher::resolve("Acero Inoxidable", &ledger), Some(0));
        // 帳上名包含於查詢名
        assert_eq!(
            StockMatcher::resolve("Acero   Inoxidable 304 Importado", &ledger),
            Some(0)
        );
    }

    #[test]
    fn test_family_segment_fallback() {
        let ledger = ledger(&["Polietileno", "Chapa-Galvanizada"]);

        // 與帳上名互不包含，但首段 "chapa" 相等
        assert_eq!(StockMatcher::resolve("Chapa_Lisa", &ledger), Some(1));
    }

    #[test]
    fn test_ledger_order_breaks_ties() {
        // 兩項都能以包含規則命中，取帳上順序較前者
        let ledger = ledger(&["Acero 304", "Acero 316"]);

        assert_eq!(StockMatcher::resolve("Acero", &ledger), Some(0));
    }

    #[test]
    fn test_no_match_returns_none() {
        let ledger = ledger(&["Polietileno"]);

        assert_eq!(StockMatcher::resolve("Cobre", &ledger), None);
        assert_eq!(StockMatcher::resolve("", &ledger), None);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let ledger = ledger(&["Acero 304", "Acero 316", "Polietileno"]);

        let first = StockMatcher::resolve("acero", &ledger);
        for _ in 0..10 {
            assert_eq!(StockMatcher::resolve("acero", &ledger), first);
        }
    }
}
