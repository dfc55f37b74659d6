//! 品項匯入
//!
//! 將匯入 CSV 解析為品項草稿。標頭比對忽略大小寫與前後空白，
//! 任何一列失敗即整批失敗，不產生部分結果。

use rust_decimal::Decimal;

use opname_core::{
    AssetCategory, AssetDraft, ItemDraft, ItemKind, MerchandiseCategory, MerchandiseDraft, Unit,
};

use crate::codec;
use crate::{CsvError, Result};

/// 匯入檔必要欄位（小寫正規形）
pub const REQUIRED_HEADERS: [&str; 7] = [
    "nama",
    "kategori",
    "harga beli",
    "harga jual",
    "stok",
    "satuan",
    "tipe",
];

/// 解析匯入 CSV 為品項草稿清單
///
/// 錯誤訊息以資料列在檔案中的列號定位（標頭為第 1 列）。
/// 回傳的草稿尚未建立品項，交由目錄批次驗證後寫入。
pub fn parse_items(text: &str) -> Result<Vec<ItemDraft>> {
    let table = codec::deserialize(text)?;
    let headers: Vec<String> = table
        .headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|name| column(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(CsvError::MissingHeaders(missing.join(", ")));
    }

    // 缺漏欄位已在上方攔截
    let positions: Vec<usize> = REQUIRED_HEADERS
        .iter()
        .filter_map(|name| column(name))
        .collect();
    let [c_nama, c_kategori, c_beli, c_jual, c_stok, c_satuan, c_tipe] = positions[..] else {
        return Err(CsvError::MissingHeaders(REQUIRED_HEADERS.join(", ")));
    };

    let mut drafts = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        let row_no = idx + 2;
        let field = |col: usize| row.get(col).map(|v| v.trim()).unwrap_or("");

        let raw_tipe = field(c_tipe);
        let kind = ItemKind::from_label(raw_tipe).ok_or_else(|| CsvError::InvalidKind {
            row: row_no,
            value: raw_tipe.to_string(),
        })?;

        let raw_satuan = field(c_satuan);
        let unit = Unit::from_label(raw_satuan).ok_or_else(|| CsvError::InvalidUnit {
            row: row_no,
            value: raw_satuan.to_string(),
        })?;

        let purchase_price = parse_decimal(field(c_beli), row_no, "harga beli")?;
        let selling_price = parse_decimal(field(c_jual), row_no, "harga jual")?;
        let stock = parse_u32(field(c_stok), row_no, "stok")?;
        let name = field(c_nama).to_string();
        let raw_category = field(c_kategori);

        // 分類依品項種類各自封閉
        let draft = match kind {
            ItemKind::Merchandise => {
                let category = MerchandiseCategory::from_label(raw_category).ok_or_else(|| {
                    CsvError::InvalidCategory {
                        row: row_no,
                        value: raw_category.to_string(),
                    }
                })?;
                ItemDraft::Merchandise(
                    MerchandiseDraft::new(name, category, purchase_price, selling_price)
                        .with_expected_stock(stock)
                        .with_unit(unit),
                )
            }
            ItemKind::FixedAsset => {
                let category = AssetCategory::from_label(raw_category).ok_or_else(|| {
                    CsvError::InvalidCategory {
                        row: row_no,
                        value: raw_category.to_string(),
                    }
                })?;
                ItemDraft::Asset(
                    AssetDraft::new(name, category, purchase_price).with_quantity(stock),
                )
            }
        };
        drafts.push(draft);
    }

    tracing::debug!("匯入 CSV 解析完成，共 {} 筆草稿", drafts.len());
    Ok(drafts)
}

fn parse_decimal(value: &str, row: usize, field: &'static str) -> Result<Decimal> {
    value.parse().map_err(|_| CsvError::InvalidNumber {
        row,
        field,
        value: value.to_string(),
    })
}

fn parse_u32(value: &str, row: usize, field: &'static str) -> Result<u32> {
    value.parse().map_err(|_| CsvError::InvalidNumber {
        row,
        field,
        value: value.to_string(),
    })
}
