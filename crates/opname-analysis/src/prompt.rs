//! 提示詞組裝
//!
//! 僅差異不為 0 的品項會被納入提示詞，資料以 JSON 內嵌。

use serde::Serialize;

use opname_audit::OpnameReport;

/// 送交分析的差異記錄
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discrepancy {
    /// 品項名稱
    pub name: String,

    /// 系統帳面庫存
    pub expected_stock: u32,

    /// 實際盤點數量
    pub physical_count: Option<u32>,

    /// 差異：實際 - 帳面
    pub variance: i64,
}

/// 自報告擷取差異記錄（保持報告順序）
pub fn collect_discrepancies(report: &OpnameReport) -> Vec<Discrepancy> {
    report
        .discrepancies()
        .map(|entry| Discrepancy {
            name: entry.item.name.clone(),
            expected_stock: entry.item.expected_stock,
            physical_count: entry.physical_count,
            variance: entry.variance,
        })
        .collect()
}

/// 組裝分析提示詞（印尼文）
pub fn build_prompt(store_name: &str, discrepancies: &[Discrepancy]) -> String {
    // 差異資料序列化不可能失敗，失敗時退化為空陣列
    let data =
        serde_json::to_string_pretty(discrepancies).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Anda adalah seorang ahli manajemen inventaris untuk toko sembako skala kecil hingga menengah.\n\
        Berdasarkan laporan stok opname berikut untuk toko \"{store_name}\", berikan analisis singkat, kemungkinan penyebab selisih stok, dan saran tindakan preventif.\n\
        \n\
        Fokuskan analisis pada 3 item dengan kekurangan (shortage) terbesar. Jika tidak ada kekurangan, sebutkan item dengan kelebihan (surplus) terbesar.\n\
        \n\
        Format respons Anda dalam bentuk poin-poin menggunakan markdown agar mudah dibaca.\n\
        Mulai dengan ringkasan umum, lalu detail item, dan terakhir saran umum.\n\
        \n\
        Berikut adalah data laporannya dalam format JSON:\n\
        {data}"
    )
}
