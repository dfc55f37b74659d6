//! # Opname CSV
//!
//! 分號分隔、BOM 前綴的 CSV 編解碼，以及品項匯入與各式匯出表格

pub mod codec;
pub mod export;
pub mod import;

// Re-export 主要類型
pub use codec::{deserialize, serialize, CsvTable};
pub use import::{parse_items, REQUIRED_HEADERS};

/// CSV 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("CSV 檔案為空或僅含標頭列")]
    EmptyFile,

    #[error("CSV 標頭無效，缺少欄位: {0}")]
    MissingHeaders(String),

    #[error("第 {row} 列的品項種類無效: {value}")]
    InvalidKind { row: usize, value: String },

    #[error("第 {row} 列的分類無效: {value}")]
    InvalidCategory { row: usize, value: String },

    #[error("第 {row} 列的單位無效: {value}")]
    InvalidUnit { row: usize, value: String },

    #[error("第 {row} 列的欄位「{field}」不是有效數字: {value}")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, CsvError>;
