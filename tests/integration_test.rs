//! 完整盤點流程整合測試

use chrono::NaiveDate;
use rust_decimal::Decimal;

use opname::{
    begin_opname, build_report, csv, is_complete, parse_items, progress, record_count, Catalog,
    CostDraft, CostPeriod, CsvError, ItemDraft, MerchandiseCategory, MerchandiseDraft, OpnameError,
    SessionState, Unit,
};

fn seed_catalog() -> (Catalog, uuid::Uuid) {
    let mut catalog = Catalog::new();
    let toko_a = catalog
        .add_store("Toko Sembako Jaya Abadi", "Jl. Merdeka No. 12")
        .unwrap();
    catalog
        .add_store("Warung Ibu Siti", "Jl. Kenanga No. 8")
        .unwrap();

    catalog
        .add_items(
            toko_a,
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
                ItemDraft::Asset(
                    opname::AssetDraft::new(
                        "Kulkas Showcase",
                        opname::AssetCategory::Elektronik,
                        Decimal::from(4500000),
                    )
                    .with_purchase_date(NaiveDate::from_ymd_opt(2022, 11, 1).unwrap()),
                ),
            ],
        )
        .unwrap();

    catalog
        .add_cost(
            toko_a,
            CostDraft::new("Sewa Toko", Decimal::from(1500000), CostPeriod::Monthly),
        )
        .unwrap();

    (catalog, toko_a)
}

#[test]
fn test_full_opname_workflow() {
    let (mut catalog, store_id) = seed_catalog();

    // 開始盤點：僅 2 筆商品，固定資產不參與
    let store = catalog.store(store_id).unwrap();
    let mut items = begin_opname(store);
    assert_eq!(items.len(), 2);
    assert_eq!(progress(&items), (0, 2));

    // 逐筆記錄：帳面 50 → 實際 47，帳面 40 → 實際 40
    let beras = items[0].item.id;
    let minyak = items[1].item.id;
    record_count(&mut items, beras, "47").unwrap();
    assert!(!is_complete(&items));
    record_count(&mut items, minyak, "40").unwrap();
    assert!(is_complete(&items));

    // 凍結報告
    let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
    let report = build_report(store, items, date).unwrap();
    assert_eq!(report.formatted_date(), "27 Agustus 2026");
    assert_eq!(report.discrepancies().count(), 1);
    assert_eq!(report.items[0].variance, -3);

    // 匯出報告 CSV
    let text = csv::opname_report_csv(&report);
    assert!(text.contains(";50;47;-3;"));
    assert_eq!(
        csv::suggested_filename("laporan_opname", &report.store_name),
        "laporan_opname_Toko_Sembako_Jaya_Abadi.csv"
    );

    // 定案：帳面庫存回寫，其他門市與固定資產不變
    let mut session = SessionState::new();
    session.complete_opname(report);
    let updated = session.finalize(catalog.stores()).unwrap();
    catalog.replace_stores(updated);

    let store = catalog.store(store_id).unwrap();
    assert_eq!(store.inventory[0].expected_stock, 47);
    assert_eq!(store.inventory[1].expected_stock, 40);
    assert_eq!(store.fixed_assets().next().unwrap().expected_stock, 1);

    // 報告已消費，重複定案失敗
    assert!(matches!(
        session.finalize(catalog.stores()),
        Err(OpnameError::NoPendingReport)
    ));
}

#[test]
fn test_csv_import_into_catalog() {
    let (mut catalog, store_id) = seed_catalog();
    let before = catalog.store(store_id).unwrap().inventory.len();

    // 範本可直接匯入
    let drafts = parse_items(&csv::import_template_csv()).unwrap();
    catalog.add_items(store_id, drafts).unwrap();

    let store = catalog.store(store_id).unwrap();
    assert_eq!(store.inventory.len(), before + 2);
    assert_eq!(store.merchandise().count(), 3);
    assert_eq!(store.fixed_assets().count(), 2);
}

#[test]
fn test_csv_import_rejects_partial_batches() {
    let (mut catalog, store_id) = seed_catalog();
    let before = catalog.store(store_id).unwrap().inventory.len();

    // 第 3 列 tipe 無效，整個檔案被拒絕
    let text = "Nama;Kategori;Harga Beli;Harga Jual;Stok;Satuan;Tipe\n\
        Gula Pasir 1kg;Sembako;14000;15500;80;Kg;BARANG\n\
        Teh Celup;Minuman;8000;9500;30;Dus;JASA";
    let err = parse_items(text).unwrap_err();
    assert!(matches!(err, CsvError::InvalidKind { row: 3, .. }));

    // 售價低於進價的草稿在目錄層被整批攔截
    let text = "Nama;Kategori;Harga Beli;Harga Jual;Stok;Satuan;Tipe\n\
        Gula Pasir 1kg;Sembako;14000;15500;80;Kg;BARANG\n\
        Teh Celup;Minuman;8000;7000;30;Dus;BARANG";
    let drafts = parse_items(text).unwrap();
    assert!(catalog.add_items(store_id, drafts).is_err());
    assert_eq!(catalog.store(store_id).unwrap().inventory.len(), before);
}

#[test]
fn test_exports_cover_all_tables() {
    let (catalog, store_id) = seed_catalog();
    let store = catalog.store(store_id).unwrap();

    let merchandise = csv::merchandise_csv(store);
    assert_eq!(merchandise.lines().count(), 3);

    let assets = csv::fixed_asset_csv(store);
    assert!(assets.contains("Kulkas Showcase"));
    assert!(assets.contains("2022-11-01"));

    let costs = csv::operational_cost_csv(store);
    assert!(costs.contains("Sewa Toko;1500000;Bulanan"));

    let checklist = csv::opname_checklist_csv(&begin_opname(store));
    assert!(checklist.contains("Stok Fisik (Kosongkan)"));

    // 所有匯出均帶 BOM 前綴
    for text in [&merchandise, &assets, &costs, &checklist] {
        assert!(text.starts_with('\u{feff}'));
    }
}

#[test]
fn test_abandoned_opname_leaves_catalog_untouched() {
    let (catalog, store_id) = seed_catalog();

    let store = catalog.store(store_id).unwrap();
    let mut items = begin_opname(store);
    let id = items[0].item.id;
    record_count(&mut items, id, "45").unwrap();
    let report = build_report(
        store,
        items,
        NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
    )
    .unwrap();

    // 離開報告頁面而未定案：捨棄後帳面維持原值
    let mut session = SessionState::new();
    session.complete_opname(report);
    session.discard();

    assert!(session.finalize(catalog.stores()).is_err());
    assert_eq!(
        catalog.store(store_id).unwrap().inventory[0].expected_stock,
        50
    );
}
