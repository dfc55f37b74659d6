//! # Opname Core
//!
//! 核心資料模型與門市目錄狀態容器

pub mod catalog;
pub mod cost;
pub mod item;
pub mod sku;
pub mod store;

// Re-export 主要類型
pub use catalog::Catalog;
pub use cost::{CostDraft, CostPeriod, OperationalCost};
pub use item::{
    AssetCategory, AssetDraft, Category, InventoryItem, ItemDraft, ItemKind, MerchandiseCategory,
    MerchandiseDraft, Unit,
};
pub use store::Store;

/// 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum OpnameError {
    #[error("找不到門市: {0}")]
    StoreNotFound(uuid::Uuid),

    #[error("找不到品項: {0}")]
    ItemNotFound(uuid::Uuid),

    #[error("找不到費用項目: {0}")]
    CostNotFound(uuid::Uuid),

    #[error("驗證失敗: {0}")]
    Validation(String),

    #[error("品項 {0} 不屬於此門市的商品清單")]
    ForeignItem(uuid::Uuid),

    #[error("盤點數量無效: {0}")]
    InvalidCount(String),

    #[error("沒有待定案的盤點報告")]
    NoPendingReport,
}

pub type Result<T> = std::result::Result<T, OpnameError>;
