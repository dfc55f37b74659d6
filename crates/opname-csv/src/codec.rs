//! CSV 編解碼
//!
//! 分號分隔、UTF-8 BOM 前綴，與常見試算表軟體的匯入預設相容。
//! 含分號、引號或換行的儲存格以雙引號包裹，內部引號成對轉義。

use crate::{CsvError, Result};

/// UTF-8 位元組順序標記，確保試算表軟體以 UTF-8 開啟
pub const BOM: char = '\u{feff}';

/// 儲存格分隔符
pub const DELIMITER: char = ';';

/// 解碼後的表格：標頭列與資料列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// 標頭列
    pub headers: Vec<String>,

    /// 資料列（不含標頭）
    pub rows: Vec<Vec<String>>,
}

/// 將標頭與資料列序列化為 CSV 文字
pub fn serialize(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(encode_row(headers.iter().copied()));
    for row in rows {
        lines.push(encode_row(row.iter().map(String::as_str)));
    }
    format!("{BOM}{}", lines.join("\n"))
}

fn encode_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells
        .map(sanitize_cell)
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

/// 儲存格轉義：含特殊字元時以雙引號包裹，內部引號寫成 `""`
fn sanitize_cell(cell: &str) -> String {
    if cell.contains(['"', DELIMITER, '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// 將 CSV 文字解碼為表格
///
/// 接受 `\n` 與 `\r\n` 換行、可有可無的 BOM，跳過空白列。
/// 引號包裹的儲存格可以跨行。少於一列資料時回傳 [`CsvError::EmptyFile`]。
pub fn deserialize(text: &str) -> Result<CsvTable> {
    let mut records = parse_records(text);
    if records.len() < 2 {
        return Err(CsvError::EmptyFile);
    }
    let headers = records.remove(0);
    Ok(CsvTable {
        headers,
        rows: records,
    })
}

fn parse_records(text: &str) -> Vec<Vec<String>> {
    let text = text.strip_prefix(BOM).unwrap_or(text);

    let mut records = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                // `""` 為轉義的引號，單一 `"` 結束包裹
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(ch);
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            DELIMITER => row.push(std::mem::take(&mut cell)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                flush_row(&mut records, &mut row, &mut cell);
            }
            '\n' => flush_row(&mut records, &mut row, &mut cell),
            _ => cell.push(ch),
        }
    }

    if !row.is_empty() || !cell.is_empty() {
        flush_row(&mut records, &mut row, &mut cell);
    }
    records
}

fn flush_row(records: &mut Vec<Vec<String>>, row: &mut Vec<String>, cell: &mut String) {
    row.push(std::mem::take(cell));
    // 空白列不構成記錄
    if row.len() == 1 && row[0].is_empty() {
        row.clear();
        return;
    }
    records.push(std::mem::take(row));
}
