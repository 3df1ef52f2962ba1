//! 小型工廠成本試算示範
//!
//! 建立名冊與價格目錄、推導產品成本、再模擬一次完工扣帳。

use anyhow::Result;
use chrono::NaiveDate;
use costing::*;
use rust_decimal::Decimal;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // 員工名冊
    let roster = vec![
        Employee::new(
            "García".to_string(),
            LaborInputs::new(Decimal::from(1200), Decimal::from(8))
                .with_vacation(Decimal::from(14))
                .with_social_charge(Decimal::from(45)),
        ),
        Employee::new(
            "Pérez".to_string(),
            LaborInputs::new(Decimal::from(950), Decimal::from(8))
                .with_rest_hours(Decimal::ONE)
                .with_social_charge(Decimal::from(45)),
        ),
    ];

    // 價格目錄（外幣單價 + 各物料匯率快照）
    let catalog = MaterialPriceCatalog::new()
        .with_price("Acero", Decimal::new(18, 1), Decimal::from(1050))
        .with_price("Polietileno", Decimal::new(25, 1), Decimal::from(1050));

    // 產品與協調器
    let product = Product::new(
        "Caño".to_string(),
        "20".to_string(),
        "Reforzado".to_string(),
        Decimal::new(45, 2), // 0.45 kg/件
        Decimal::from(500),
        Decimal::from(40),
        vec![
            BomLine::catalog("Acero".to_string(), Decimal::new(4, 1)),
            BomLine::catalog("Polietileno".to_string(), Decimal::new(5, 2)),
        ],
    )
    .with_sale_price(Decimal::from(3200), Currency::Local)
    .with_tax_pct(Decimal::from(3));

    let mut coordinator = RecalculationCoordinator::new();
    coordinator.add_product(ProductCollection::Production, product);
    let average = coordinator.on_roster_changed(&roster);
    coordinator.on_material_prices_changed(&catalog);

    let product = coordinator.find("Caño 20 Reforzado").unwrap();
    let costing = product.costing();
    println!("名冊平均實際時薪: {average}");
    println!("單位原物料成本:   {}", costing.unit_material_cost);
    println!("單位人工成本:     {}", costing.unit_labor_cost);
    println!("基礎單位成本:     {}", costing.base_unit_cost);
    println!("單位稅額 (IIBB):  {}", costing.unit_tax);
    if let Some(profit) = costing.net_unit_profit {
        println!("淨單位獲利:       {profit}");
    }

    // 完工 200 件：驗證充足後原子扣帳並完工入帳
    let mut stock = StockLedger::new();
    stock.receive("Acero", Decimal::from(120), Decimal::new(18, 1), Decimal::from(1050));
    stock.receive("Polietileno", Decimal::from(30), Decimal::new(25, 1), Decimal::from(1050));
    let mut finished = FinishedGoodsLedger::new();

    let product = product.clone();
    let receipt = StockConsumptionMatcher::complete_production(
        &product,
        Decimal::from(200),
        NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
        &mut stock,
        &mut finished,
    )?;

    println!("完工 {} 件，領料 {} 筆:", receipt.quantity, receipt.consumptions.len());
    for record in &receipt.consumptions {
        println!("  - {}: {} kg", record.material, record.quantity_kg);
    }
    println!(
        "成品帳: {} 件，混合單位成本 {}",
        receipt.finished.on_hand_qty, receipt.finished.unit_cost
    );

    Ok(())
}
