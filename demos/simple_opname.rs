//! 簡單盤點流程示例

use chrono::NaiveDate;
use opname::{
    begin_opname, build_report, csv, record_count, Catalog, ItemDraft, MerchandiseCategory,
    MerchandiseDraft, SessionState, Unit,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    println!("=== 簡單盤點流程示例 ===\n");

    // 創建門市與庫存
    let mut catalog = Catalog::new();
    let store_id = catalog.add_store("Toko Sembako Jaya Abadi", "Jl. Merdeka No. 12")?;
    catalog.add_items(
        store_id,
        vec![
            ItemDraft::Merchandise(
                MerchandiseDraft::new(
                    "Beras Super 5kg",
                    MerchandiseCategory::Sembako,
                    Decimal::from(65000),
                    Decimal::from(68000),
                )
                .with_expected_stock(50)
                .with_unit(Unit::Kg),
            ),
            ItemDraft::Merchandise(
                MerchandiseDraft::new(
                    "Minyak Goreng 2L",
                    MerchandiseCategory::Sembako,
                    Decimal::from(32000),
                    Decimal::from(35000),
                )
                .with_expected_stock(40)
                .with_unit(Unit::Botol),
            ),
        ],
    )?;

    // 開始盤點並記錄實際數量
    let store = catalog
        .store(store_id)
        .ok_or("store tidak ditemukan")?;
    let mut items = begin_opname(store);
    let counts = ["47", "40"];

    println!("盤點清單:");
    let ids: Vec<_> = items.iter().map(|entry| entry.item.id).collect();
    for (id, raw) in ids.into_iter().zip(counts) {
        record_count(&mut items, id, raw)?;
    }
    for entry in &items {
        println!(
            "  - {}: 帳面 {}, 實際 {:?}, 差異 {}",
            entry.item.name, entry.item.expected_stock, entry.physical_count, entry.variance
        );
    }

    // 凍結報告並匯出 CSV
    let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
    let report = build_report(store, items, date)?;
    println!("\n報告日期: {}", report.formatted_date());
    println!(
        "匯出檔名: {}",
        csv::suggested_filename("laporan_opname", &report.store_name)
    );
    println!("\n{}", csv::opname_report_csv(&report));

    // 定案：帳面庫存回寫
    let mut session = SessionState::new();
    session.complete_opname(report);
    let updated = session.finalize(catalog.stores())?;
    catalog.replace_stores(updated);

    println!("定案後帳面庫存:");
    for item in catalog
        .store(store_id)
        .ok_or("store tidak ditemukan")?
        .merchandise()
    {
        println!("  - {}: {}", item.name, item.expected_stock);
    }

    Ok(())
}
