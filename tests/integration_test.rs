//! 集成測試

use chrono::NaiveDate;
use costing::*;
use rust_decimal::Decimal;

fn completion_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
}

#[test]
fn test_full_costing_flow() {
    // 場景：兩名員工、一份價格目錄、一個產品，
    // 名冊 → 目錄 → 產品 的順序推導後完工入帳

    // 1. 員工名冊
    let roster = vec![
        Employee::new(
            "García".to_string(),
            LaborInputs::new(Decimal::from(1000), Decimal::from(8)),
        ),
        Employee::new(
            "Pérez".to_string(),
            LaborInputs::new(Decimal::from(2000), Decimal::from(8))
                .with_social_charge(Decimal::ZERO),
        ),
    ];

    // 2. 價格目錄
    let catalog = MaterialPriceCatalog::new()
        .with_price("Acero", Decimal::from(2), Decimal::from(1000))
        .with_price("Polietileno", Decimal::from(3), Decimal::from(900));

    // 3. 產品：0.5 kg Acero/件，100 件，每小時 25 件，售價 2000 含 IIBB 3%
    let product = Product::new(
        "Caño".to_string(),
        "20".to_string(),
        "Reforzado".to_string(),
        Decimal::new(5, 1),
        Decimal::from(100),
        Decimal::from(25),
        vec![BomLine::catalog("Acero".to_string(), Decimal::new(5, 1))],
    )
    .with_sale_price(Decimal::from(2000), Currency::Local)
    .with_tax_pct(Decimal::from(3));

    // 4. 協調器：名冊 → 目錄 → 產品
    let mut coordinator = RecalculationCoordinator::new();
    coordinator.add_product(ProductCollection::Production, product);
    let average = coordinator.on_roster_changed(&roster);
    coordinator.on_material_prices_changed(&catalog);

    // 平均實際時薪 = (1083.33333 + 2166.66667) / 2
    assert_eq!(average, Decimal::from(1625));

    let costing = coordinator.find("Caño 20 Reforzado").unwrap().costing().clone();
    assert_eq!(costing.unit_material_cost, Decimal::from(1000));
    // 4 小時 × 1625 / 100 件 = 65
    assert_eq!(costing.unit_labor_cost, Decimal::from(65));
    assert_eq!(costing.base_unit_cost, Decimal::from(1065));
    assert_eq!(costing.unit_tax, Decimal::from(60));
    // 2000 − 1065 − 60 = 875
    assert_eq!(costing.net_unit_profit, Some(Decimal::from(875)));
    assert_eq!(costing.net_total_profit, Some(Decimal::from(87500)));

    // 5. 完工：50 件 × 0.5 kg = 25 kg
    let mut stock = StockLedger::new();
    stock.receive("Acero", Decimal::from(100), Decimal::from(2), Decimal::from(1000));
    let mut finished = FinishedGoodsLedger::new();

    let product = coordinator.find("Caño 20 Reforzado").unwrap().clone();
    let receipt = StockConsumptionMatcher::complete_production(
        &product,
        Decimal::from(50),
        completion_date(),
        &mut stock,
        &mut finished,
    )
    .unwrap();

    assert_eq!(stock.get(0).unwrap().on_hand_kg, Decimal::from(75));
    assert_eq!(receipt.consumptions.len(), 1);
    assert_eq!(finished.find("Caño 20 Reforzado").unwrap().unit_cost, Decimal::from(1065));
}

#[test]
fn test_baseline_employee_scenario() {
    // 時薪 1000、20 天出勤、每班 8 小時、其餘皆 0
    let employee = Employee::new(
        "García".to_string(),
        LaborInputs::new(Decimal::from(1000), Decimal::from(8))
            .with_days_worked(Decimal::from(20)),
    );

    let breakdown = employee.breakdown();
    assert_eq!(breakdown.payable_days, Decimal::from(261));
    assert_eq!(breakdown.productive_hours, Decimal::from(2088));
    // 指數 = 100 + 100/12 ≈ 108.33；實際時薪 ≈ 1083.33333
    assert_eq!(breakdown.adjustment_index.round_dp(2), Decimal::new(10833, 2));
    assert_eq!(employee.effective_hourly_cost(), Decimal::new(108333333, 5));
}

#[test]
fn test_missing_price_degrades_to_zero_contribution() {
    // 兩行配方：一行目錄缺價、一行 0.5 × 2 × 1000
    let catalog =
        MaterialPriceCatalog::new().with_price("Acero", Decimal::from(2), Decimal::from(1000));
    let bom = vec![
        BomLine::catalog("Inexistente".to_string(), Decimal::new(3, 1)),
        BomLine::catalog("Acero".to_string(), Decimal::new(5, 1)),
    ];

    let cost = MaterialCostCalculator::compute(&bom, &catalog, None);
    assert_eq!(cost, Decimal::from(1000));
}

#[test]
fn test_profitability_unknown_without_sale_price() {
    let catalog =
        MaterialPriceCatalog::new().with_price("Acero", Decimal::from(2), Decimal::from(1000));
    let mut product = Product::new(
        "Chapa".to_string(),
        "3".to_string(),
        String::new(),
        Decimal::ONE,
        Decimal::from(10),
        Decimal::from(5),
        vec![BomLine::catalog("Acero".to_string(), Decimal::ONE)],
    );
    product.update_material_cost(&catalog, None);

    assert_eq!(product.costing().net_unit_profit, None);
    assert_eq!(product.costing().net_total_profit, None);
}

#[test]
fn test_rejected_completion_leaves_stock_untouched() {
    // 庫存 Steel 10 kg，需求 12 kg → 拒絕且庫存不變
    let product = Product::new(
        "Caño".to_string(),
        "25".to_string(),
        String::new(),
        Decimal::new(12, 1),
        Decimal::from(10),
        Decimal::from(10),
        vec![BomLine::catalog("Steel".to_string(), Decimal::new(12, 1))],
    );
    let mut stock = StockLedger::new();
    stock.receive("Steel", Decimal::from(10), Decimal::from(2), Decimal::from(1000));
    let mut finished = FinishedGoodsLedger::new();

    let result = StockConsumptionMatcher::complete_production(
        &product,
        Decimal::from(10),
        completion_date(),
        &mut stock,
        &mut finished,
    );

    assert!(matches!(result, Err(CostingError::StockShortfall(_))));
    assert_eq!(stock.get(0).unwrap().on_hand_kg, Decimal::from(10));
    assert!(finished.is_empty());
}

#[test]
fn test_committed_completion_appends_consumption_record() {
    // 庫存 Steel 10 kg，扣 5 kg → 剩 5 kg 且有一筆領料紀錄
    let product = Product::new(
        "Caño".to_string(),
        "25".to_string(),
        String::new(),
        Decimal::new(5, 1),
        Decimal::from(10),
        Decimal::from(10),
        vec![BomLine::catalog("Steel".to_string(), Decimal::new(5, 1))],
    );
    let mut stock = StockLedger::new();
    stock.receive("Steel", Decimal::from(10), Decimal::from(2), Decimal::from(1000));
    let mut finished = FinishedGoodsLedger::new();

    let receipt = StockConsumptionMatcher::complete_production(
        &product,
        Decimal::from(10),
        completion_date(),
        &mut stock,
        &mut finished,
    )
    .unwrap();

    assert_eq!(stock.get(0).unwrap().on_hand_kg, Decimal::from(5));
    assert_eq!(receipt.consumptions.len(), 1);
    assert_eq!(receipt.consumptions[0].quantity_kg, Decimal::from(5));
    assert_eq!(receipt.consumptions[0].product_name, "Caño 25");
}

#[test]
fn test_replay_in_topological_order_restores_caches() {
    // 持久層只保存輸入；載入後依 名冊 → 目錄 → 產品 順序重放即可還原所有快取
    let roster = vec![Employee::new(
        "García".to_string(),
        LaborInputs::new(Decimal::from(1500), Decimal::from(8)),
    )];
    let catalog =
        MaterialPriceCatalog::new().with_price("Acero", Decimal::from(2), Decimal::from(1000));

    let build = || {
        let mut coordinator = RecalculationCoordinator::new();
        coordinator.add_product(
            ProductCollection::Production,
            Product::new(
                "Caño".to_string(),
                "20".to_string(),
                String::new(),
                Decimal::new(5, 1),
                Decimal::from(100),
                Decimal::from(25),
                vec![BomLine::catalog("Acero".to_string(), Decimal::new(5, 1))],
            )
            .with_sale_price(Decimal::from(2000), Currency::Local),
        );
        coordinator.on_roster_changed(&roster);
        coordinator.on_material_prices_changed(&catalog);
        coordinator.find("Caño 20").unwrap().clone()
    };

    // 兩次獨立重放結果逐欄位一致
    assert_eq!(build(), build());
}
