//! AI 差異分析示例
//!
//! 需要設定 `GEMINI_API_KEY` 環境變數，未設定時會顯示停用訊息。

use chrono::NaiveDate;
use opname::{
    begin_opname, build_report, record_count, AnalysisClient, AnalysisConfig, Catalog, ItemDraft,
    MerchandiseCategory, MerchandiseDraft,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("=== AI 差異分析示例 ===\n");

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
                .with_expected_stock(50),
            ),
            ItemDraft::Merchandise(
                MerchandiseDraft::new(
                    "Rokok Surya 12",
                    MerchandiseCategory::Rokok,
                    Decimal::from(28000),
                    Decimal::from(30000),
                )
                .with_expected_stock(100),
            ),
        ],
    )?;

    let store = catalog
        .store(store_id)
        .ok_or_else(|| anyhow::anyhow!("store tidak ditemukan"))?;
    let mut items = begin_opname(store);
    let ids: Vec<_> = items.iter().map(|entry| entry.item.id).collect();
    record_count(&mut items, ids[0], "47")?;
    record_count(&mut items, ids[1], "92")?;

    let report = build_report(
        store,
        items,
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
    )?;

    let client = AnalysisClient::new(AnalysisConfig::from_env());
    let analysis = client.analyze(&report).await;

    println!("{analysis}");
    Ok(())
}
