//! # Opname Analysis
//!
//! 以 Google Gemini 為後端的盤點差異 AI 分析。
//! 分析結果恆為可顯示的印尼文文字：後端不可用、呼叫失敗或
//! 無差異可分析時回傳對應的固定訊息，不向呼叫端拋出錯誤。

pub mod adapter;
pub mod prompt;

// Re-export 主要類型
pub use adapter::{
    AnalysisClient, AnalysisConfig, MSG_BUSY, MSG_DISABLED, MSG_FAILED, MSG_NO_DISCREPANCY,
};
pub use prompt::{build_prompt, collect_discrepancies, Discrepancy};
