//! # Opname Audit
//!
//! 盤點作業流程：建立盤點清單、記錄實際數量、產生報告、定案回寫

pub mod finalize;
pub mod report;
pub mod session;

// Re-export 主要類型
pub use finalize::{apply_report, SessionState};
pub use report::{build_report, OpnameReport};
pub use session::{begin_opname, is_complete, progress, record_count, OpnameItem};
