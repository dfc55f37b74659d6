//! 匯出表格
//!
//! 各式報表的欄位排列與檔名建議。所有匯出均經由 [`crate::codec`]
//! 序列化，數值以原始字串輸出，不做千分位等顯示格式化。

use opname_audit::{OpnameItem, OpnameReport};
use opname_core::Store;

use crate::codec;

/// 門市商品清單
pub fn merchandise_csv(store: &Store) -> String {
    let headers = [
        "Nama",
        "SKU",
        "Kategori",
        "Harga Beli",
        "Harga Jual",
        "Stok",
        "Satuan",
    ];
    let rows: Vec<Vec<String>> = store
        .merchandise()
        .map(|item| {
            vec![
                item.name.clone(),
                item.sku.clone(),
                item.category.label().to_string(),
                item.purchase_price.to_string(),
                item.selling_price.to_string(),
                item.expected_stock.to_string(),
                item.unit.label().to_string(),
            ]
        })
        .collect();
    codec::serialize(&headers, &rows)
}

/// 門市固定資產清單（購入日期 ISO 格式，未知時留空）
pub fn fixed_asset_csv(store: &Store) -> String {
    let headers = [
        "Nama Aset",
        "SKU",
        "Kategori",
        "Tgl Pembelian",
        "Harga Pembelian",
        "Jumlah Stok",
        "Catatan",
    ];
    let rows: Vec<Vec<String>> = store
        .fixed_assets()
        .map(|item| {
            vec![
                item.name.clone(),
                item.sku.clone(),
                item.category.label().to_string(),
                item.purchase_date
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                item.purchase_price.to_string(),
                item.expected_stock.to_string(),
                item.notes.clone().unwrap_or_default(),
            ]
        })
        .collect();
    codec::serialize(&headers, &rows)
}

/// 門市營運費用清單
pub fn operational_cost_csv(store: &Store) -> String {
    let headers = ["Nama Biaya", "Jumlah", "Periode"];
    let rows: Vec<Vec<String>> = store
        .operational_costs
        .iter()
        .map(|cost| {
            vec![
                cost.name.clone(),
                cost.amount.to_string(),
                cost.period.label().to_string(),
            ]
        })
        .collect();
    codec::serialize(&headers, &rows)
}

/// 盤點工作底稿：實際數量欄留空，供列印後手寫
pub fn opname_checklist_csv(items: &[OpnameItem]) -> String {
    let headers = [
        "Nama Item",
        "SKU",
        "Stok Sistem",
        "Satuan",
        "Stok Fisik (Kosongkan)",
    ];
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|entry| {
            vec![
                entry.item.name.clone(),
                entry.item.sku.clone(),
                entry.item.expected_stock.to_string(),
                entry.item.unit.label().to_string(),
                String::new(),
            ]
        })
        .collect();
    codec::serialize(&headers, &rows)
}

/// 盤點結果報告：未輸入的實際數量以 0 輸出
pub fn opname_report_csv(report: &OpnameReport) -> String {
    let headers = [
        "Nama Barang",
        "SKU",
        "Stok Sistem",
        "Stok Fisik",
        "Selisih",
        "Satuan",
    ];
    let rows: Vec<Vec<String>> = report
        .items
        .iter()
        .map(|entry| {
            vec![
                entry.item.name.clone(),
                entry.item.sku.clone(),
                entry.item.expected_stock.to_string(),
                entry.physical_count.unwrap_or(0).to_string(),
                entry.variance.to_string(),
                entry.item.unit.label().to_string(),
            ]
        })
        .collect();
    codec::serialize(&headers, &rows)
}

/// 匯入範本：必要欄位標頭加兩列示範資料（一筆商品、一筆資產）
pub fn import_template_csv() -> String {
    let headers = ["Nama", "Kategori", "Harga Beli", "Harga Jual", "Stok", "Satuan", "Tipe"];
    let rows = vec![
        vec![
            "Beras Premium 10kg".to_string(),
            "Sembako".to_string(),
            "120000".to_string(),
            "125000".to_string(),
            "20".to_string(),
            "Kg".to_string(),
            "BARANG".to_string(),
        ],
        vec![
            "Kipas Angin Dinding".to_string(),
            "Lainnya".to_string(),
            "250000".to_string(),
            "0".to_string(),
            "2".to_string(),
            "Pcs".to_string(),
            "ASET_TETAP".to_string(),
        ],
    ];
    codec::serialize(&headers, &rows)
}

/// 匯入範本的建議檔名
pub const TEMPLATE_FILENAME: &str = "template_impor_item.csv";

/// 匯出檔的建議檔名：門市名稱中的空白換成底線
///
/// 例如 `suggested_filename("laporan_opname", "Toko A")`
/// 得到 `laporan_opname_Toko_A.csv`。
pub fn suggested_filename(prefix: &str, store_name: &str) -> String {
    let safe_name = store_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{prefix}_{safe_name}.csv")
}
