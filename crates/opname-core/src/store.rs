//! 門市模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cost::OperationalCost;
use crate::item::{InventoryItem, ItemKind};

/// 門市
///
/// 門市獨佔持有其庫存與費用清單，刪除門市時一併移除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    /// 門市 ID
    pub id: Uuid,

    /// 名稱
    pub name: String,

    /// 地址
    pub location: String,

    /// 庫存品項（商品與固定資產）
    pub inventory: Vec<InventoryItem>,

    /// 營運費用
    pub operational_costs: Vec<OperationalCost>,
}

impl Store {
    /// 創建新的門市
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: location.into(),
            inventory: Vec::new(),
            operational_costs: Vec::new(),
        }
    }

    /// 依 ID 查找品項
    pub fn item(&self, item_id: Uuid) -> Option<&InventoryItem> {
        self.inventory.iter().find(|item| item.id == item_id)
    }

    /// 販售商品（保持庫存順序）
    pub fn merchandise(&self) -> impl Iterator<Item = &InventoryItem> {
        self.inventory
            .iter()
            .filter(|item| item.kind() == ItemKind::Merchandise)
    }

    /// 固定資產（保持庫存順序）
    pub fn fixed_assets(&self) -> impl Iterator<Item = &InventoryItem> {
        self.inventory
            .iter()
            .filter(|item| item.kind() == ItemKind::FixedAsset)
    }
}
