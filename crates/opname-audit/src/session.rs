//! 盤點作業
//!
//! 由門市庫存建立待盤點工作清單（僅販售商品），
//! 逐項記錄實際數量並計算差異。

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use opname_core::{InventoryItem, OpnameError, Result, Store};

/// 盤點工作記錄
///
/// 持有品項的複本而非引用，盤點期間的門市變更不影響已建立的清單。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpnameItem {
    /// 品項快照
    pub item: InventoryItem,

    /// 實際盤點數量（尚未輸入時為 `None`）
    pub physical_count: Option<u32>,

    /// 差異：實際 - 帳面（尚未輸入時為 0）
    pub variance: i64,
}

impl OpnameItem {
    fn from_item(item: &InventoryItem) -> Self {
        Self {
            item: item.clone(),
            physical_count: None,
            variance: 0,
        }
    }

    /// 是否已輸入實際數量
    pub fn is_counted(&self) -> bool {
        self.physical_count.is_some()
    }
}

/// 由門市庫存建立盤點清單
///
/// 僅納入販售商品，固定資產不參與盤點；順序與庫存順序一致。
pub fn begin_opname(store: &Store) -> Vec<OpnameItem> {
    let items: Vec<OpnameItem> = store.merchandise().map(OpnameItem::from_item).collect();
    tracing::debug!("門市 {} 開始盤點，共 {} 筆商品", store.name, items.len());
    items
}

/// 記錄單一品項的實際數量
///
/// - 空白輸入：清除數量，差異歸 0
/// - 無效輸入（非整數或負數）：回傳錯誤，清單完全不變
/// - 有效整數：僅更新目標品項的數量與差異
pub fn record_count(items: &mut [OpnameItem], item_id: Uuid, raw: &str) -> Result<()> {
    let raw = raw.trim();

    // 先解析再定位，解析失敗時不碰任何記錄
    let count = if raw.is_empty() {
        None
    } else {
        let value: u32 = raw
            .parse()
            .map_err(|_| OpnameError::InvalidCount(raw.to_string()))?;
        Some(value)
    };

    let entry = items
        .iter_mut()
        .find(|entry| entry.item.id == item_id)
        .ok_or(OpnameError::ItemNotFound(item_id))?;

    entry.physical_count = count;
    entry.variance = match count {
        Some(value) => i64::from(value) - i64::from(entry.item.expected_stock),
        None => 0,
    };
    Ok(())
}

/// 是否全部品項皆已輸入實際數量（空清單視為完成）
pub fn is_complete(items: &[OpnameItem]) -> bool {
    items.iter().all(OpnameItem::is_counted)
}

/// 盤點進度：（已完成筆數，總筆數）
pub fn progress(items: &[OpnameItem]) -> (usize, usize) {
    let done = items.iter().filter(|entry| entry.is_counted()).count();
    (done, items.len())
}
