//! 門市目錄狀態容器
//!
//! 所有變更操作先完成驗證再套用（全有或全無），
//! 無效輸入不會造成部分寫入。

use uuid::Uuid;

use crate::cost::CostDraft;
use crate::item::ItemDraft;
use crate::store::Store;
use crate::{OpnameError, Result};

/// 門市目錄
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stores: Vec<Store>,
}

impl Catalog {
    /// 創建空目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 以既有門市清單創建目錄
    pub fn with_stores(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    /// 所有門市
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// 依 ID 查找門市
    ///
    /// 回傳 `None` 表示門市已不存在，呼叫端應退回門市列表。
    pub fn store(&self, store_id: Uuid) -> Option<&Store> {
        self.stores.iter().find(|store| store.id == store_id)
    }

    fn store_mut(&mut self, store_id: Uuid) -> Result<&mut Store> {
        self.stores
            .iter_mut()
            .find(|store| store.id == store_id)
            .ok_or(OpnameError::StoreNotFound(store_id))
    }

    /// 新增門市
    pub fn add_store(
        &mut self,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Uuid> {
        let name = name.into();
        let location = location.into();
        if name.trim().is_empty() {
            return Err(OpnameError::Validation("門市名稱不可為空".to_string()));
        }
        if location.trim().is_empty() {
            return Err(OpnameError::Validation("門市地址不可為空".to_string()));
        }

        let store = Store::new(name, location);
        let id = store.id;
        tracing::info!("新增門市: {} ({})", store.name, id);
        self.stores.push(store);
        Ok(id)
    }

    /// 刪除門市（連同其庫存與費用）
    pub fn delete_store(&mut self, store_id: Uuid) -> Result<()> {
        let before = self.stores.len();
        self.stores.retain(|store| store.id != store_id);
        if self.stores.len() == before {
            return Err(OpnameError::StoreNotFound(store_id));
        }
        tracing::info!("刪除門市: {}", store_id);
        Ok(())
    }

    /// 新增品項
    pub fn add_item(&mut self, store_id: Uuid, draft: ItemDraft) -> Result<Uuid> {
        let ids = self.add_items(store_id, vec![draft])?;
        Ok(ids[0])
    }

    /// 批次新增品項（CSV 匯入使用）
    ///
    /// 先驗證全部草稿，任一無效即整批拒絕，不產生部分寫入。
    pub fn add_items(&mut self, store_id: Uuid, drafts: Vec<ItemDraft>) -> Result<Vec<Uuid>> {
        let store = self
            .stores
            .iter()
            .position(|store| store.id == store_id)
            .ok_or(OpnameError::StoreNotFound(store_id))?;

        for draft in &drafts {
            draft.validate()?;
        }

        let mut ids = Vec::with_capacity(drafts.len());
        let mut items = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let item = draft.build()?;
            ids.push(item.id);
            items.push(item);
        }

        tracing::info!(
            "門市 {} 新增 {} 筆品項",
            self.stores[store].name,
            items.len()
        );
        self.stores[store].inventory.extend(items);
        Ok(ids)
    }

    /// 更新品項（`id`、SKU 與種類保持不變）
    pub fn update_item(&mut self, store_id: Uuid, item_id: Uuid, draft: ItemDraft) -> Result<()> {
        let store = self.store_mut(store_id)?;
        let item = store
            .inventory
            .iter_mut()
            .find(|item| item.id == item_id)
            .ok_or(OpnameError::ItemNotFound(item_id))?;
        draft.apply_to(item)
    }

    /// 刪除品項
    pub fn delete_item(&mut self, store_id: Uuid, item_id: Uuid) -> Result<()> {
        let store = self.store_mut(store_id)?;
        let before = store.inventory.len();
        store.inventory.retain(|item| item.id != item_id);
        if store.inventory.len() == before {
            return Err(OpnameError::ItemNotFound(item_id));
        }
        Ok(())
    }

    /// 新增費用項目
    pub fn add_cost(&mut self, store_id: Uuid, draft: CostDraft) -> Result<Uuid> {
        let store = self.store_mut(store_id)?;
        let cost = draft.build()?;
        let id = cost.id;
        store.operational_costs.push(cost);
        Ok(id)
    }

    /// 更新費用項目
    pub fn update_cost(&mut self, store_id: Uuid, cost_id: Uuid, draft: CostDraft) -> Result<()> {
        let store = self.store_mut(store_id)?;
        let cost = store
            .operational_costs
            .iter_mut()
            .find(|cost| cost.id == cost_id)
            .ok_or(OpnameError::CostNotFound(cost_id))?;
        draft.apply_to(cost)
    }

    /// 刪除費用項目
    pub fn delete_cost(&mut self, store_id: Uuid, cost_id: Uuid) -> Result<()> {
        let store = self.store_mut(store_id)?;
        let before = store.operational_costs.len();
        store.operational_costs.retain(|cost| cost.id != cost_id);
        if store.operational_costs.len() == before {
            return Err(OpnameError::CostNotFound(cost_id));
        }
        Ok(())
    }

    /// 以新的門市清單取代現有清單（報告定案後使用）
    pub fn replace_stores(&mut self, stores: Vec<Store>) {
        self.stores = stores;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::CostPeriod;
    use crate::item::{MerchandiseCategory, MerchandiseDraft, Unit};
    use rust_decimal::Decimal;

    fn merchandise_draft(name: &str) -> ItemDraft {
        ItemDraft::Merchandise(
            MerchandiseDraft::new(
                name,
                MerchandiseCategory::Sembako,
                Decimal::from(10000),
                Decimal::from(12000),
            )
            .with_expected_stock(10)
            .with_unit(Unit::Pcs),
        )
    }

    #[test]
    fn test_add_and_delete_store() {
        let mut catalog = Catalog::new();
        let id = catalog
            .add_store("Toko Berkah Sentosa", "Jl. Pahlawan No. 45")
            .unwrap();

        assert_eq!(catalog.stores().len(), 1);
        assert!(catalog.store(id).is_some());

        catalog.delete_store(id).unwrap();
        assert!(catalog.stores().is_empty());
        assert!(matches!(
            catalog.delete_store(id),
            Err(OpnameError::StoreNotFound(_))
        ));
    }

    #[test]
    fn test_empty_store_name_rejected() {
        let mut catalog = Catalog::new();
        assert!(catalog.add_store("  ", "Jl. Kenanga No. 8").is_err());
        assert!(catalog.stores().is_empty());
    }

    #[test]
    fn test_add_items_all_or_nothing() {
        let mut catalog = Catalog::new();
        let store_id = catalog.add_store("Warung Ibu Siti", "Jl. Kenanga No. 8").unwrap();

        // 第二筆售價低於進價，整批必須被拒絕
        let invalid = ItemDraft::Merchandise(MerchandiseDraft::new(
            "Minyak Goreng 2L",
            MerchandiseCategory::Sembako,
            Decimal::from(32000),
            Decimal::from(30000),
        ));
        let result = catalog.add_items(store_id, vec![merchandise_draft("Beras"), invalid]);

        assert!(result.is_err());
        assert!(catalog.store(store_id).unwrap().inventory.is_empty());
    }

    #[test]
    fn test_update_item_not_found() {
        let mut catalog = Catalog::new();
        let store_id = catalog.add_store("Toko A", "Jl. Merdeka").unwrap();

        let err = catalog
            .update_item(store_id, Uuid::new_v4(), merchandise_draft("Beras"))
            .unwrap_err();
        assert!(matches!(err, OpnameError::ItemNotFound(_)));
    }

    #[test]
    fn test_cost_lifecycle() {
        let mut catalog = Catalog::new();
        let store_id = catalog.add_store("Toko A", "Jl. Merdeka").unwrap();

        let cost_id = catalog
            .add_cost(
                store_id,
                CostDraft::new("Sewa Toko", Decimal::from(1500000), CostPeriod::Monthly),
            )
            .unwrap();

        catalog
            .update_cost(
                store_id,
                cost_id,
                CostDraft::new("Sewa Toko", Decimal::from(1750000), CostPeriod::Monthly),
            )
            .unwrap();
        assert_eq!(
            catalog.store(store_id).unwrap().operational_costs[0].amount,
            Decimal::from(1750000)
        );

        catalog.delete_cost(store_id, cost_id).unwrap();
        assert!(catalog
            .store(store_id)
            .unwrap()
            .operational_costs
            .is_empty());
    }

    #[test]
    fn test_mutation_on_missing_store() {
        let mut catalog = Catalog::new();
        let err = catalog
            .add_item(Uuid::new_v4(), merchandise_draft("Beras"))
            .unwrap_err();
        assert!(matches!(err, OpnameError::StoreNotFound(_)));
    }
}
