//! # Opname
//!
//! 小型零售門市的庫存與盤點（stok opname）管理工具組。
//!
//! - [`opname_core`]：門市目錄、品項與費用模型
//! - [`opname_audit`]：盤點作業、報告與定案回寫
//! - [`opname_csv`]：分號分隔 CSV 的匯入與匯出
//! - [`opname_analysis`]：盤點差異的 Gemini AI 分析
//!
//! ## 快速開始
//!
//! ```
//! use opname::{Catalog, ItemDraft, MerchandiseCategory, MerchandiseDraft};
//! use opname::{begin_opname, build_report, record_count, SessionState};
//! use rust_decimal::Decimal;
//!
//! # fn main() -> opname::Result<()> {
//! let mut catalog = Catalog::new();
//! let store_id = catalog.add_store("Toko A", "Jl. Merdeka No. 12")?;
//! let item_id = catalog.add_item(
//!     store_id,
//!     ItemDraft::Merchandise(
//!         MerchandiseDraft::new(
//!             "Beras Super 5kg",
//!             MerchandiseCategory::Sembako,
//!             Decimal::from(65000),
//!             Decimal::from(68000),
//!         )
//!         .with_expected_stock(50),
//!     ),
//! )?;
//!
//! // 盤點：帳面 50、實際 47
//! let store = catalog.store(store_id).ok_or(opname::OpnameError::StoreNotFound(store_id))?;
//! let mut items = begin_opname(store);
//! record_count(&mut items, item_id, "47")?;
//! let report = build_report(store, items, chrono::NaiveDate::from_ymd_opt(2026, 8, 27).unwrap())?;
//!
//! // 定案：帳面庫存回寫為 47
//! let mut session = SessionState::new();
//! session.complete_opname(report);
//! let updated = session.finalize(catalog.stores())?;
//! catalog.replace_stores(updated);
//! # Ok(())
//! # }
//! ```

pub use opname_core::{
    AssetCategory, AssetDraft, Catalog, Category, CostDraft, CostPeriod, InventoryItem, ItemDraft,
    ItemKind, MerchandiseCategory, MerchandiseDraft, OperationalCost, OpnameError, Result, Store,
    Unit,
};

pub use opname_audit::{
    apply_report, begin_opname, build_report, is_complete, progress, record_count, OpnameItem,
    OpnameReport, SessionState,
};

pub use opname_csv::{parse_items, CsvError};

pub use opname_analysis::{AnalysisClient, AnalysisConfig};

/// CSV 編解碼與匯出表格
pub mod csv {
    pub use opname_csv::codec::{deserialize, serialize, CsvTable};
    pub use opname_csv::export::{
        fixed_asset_csv, import_template_csv, merchandise_csv, operational_cost_csv,
        opname_checklist_csv, opname_report_csv, suggested_filename, TEMPLATE_FILENAME,
    };
    pub use opname_csv::import::REQUIRED_HEADERS;
}

/// AI 分析的固定訊息
pub mod analysis {
    pub use opname_analysis::{MSG_BUSY, MSG_DISABLED, MSG_FAILED, MSG_NO_DISCREPANCY};
}
