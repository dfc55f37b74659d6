//! 報告定案
//!
//! 將盤點結果回寫到門市帳面庫存。回寫是純函數式更新，
//! 輸入的門市清單不會被就地修改。

use opname_core::{OpnameError, Result, Store};

use crate::report::OpnameReport;

/// 將報告套用到門市清單，回傳更新後的新清單
///
/// 僅報告所屬門市中出現在報告裡的品項會被更新：
/// 帳面庫存改為實際盤點數量，數量為 `None` 時保留原帳面值。
/// 固定資產與其他門市完全不受影響。以同一份報告重複套用結果相同。
pub fn apply_report(stores: &[Store], report: &OpnameReport) -> Vec<Store> {
    stores
        .iter()
        .map(|store| {
            if store.id != report.store_id {
                return store.clone();
            }

            let mut updated = store.clone();
            for item in &mut updated.inventory {
                if let Some(entry) = report.items.iter().find(|entry| entry.item.id == item.id) {
                    item.expected_stock = entry.physical_count.unwrap_or(item.expected_stock);
                }
            }
            updated
        })
        .collect()
}

/// 盤點會話狀態
///
/// 同一時間至多持有一份待定案報告；定案或捨棄後清空。
#[derive(Debug, Default)]
pub struct SessionState {
    pending: Option<OpnameReport>,
}

impl SessionState {
    /// 創建空的會話狀態
    pub fn new() -> Self {
        Self::default()
    }

    /// 盤點完成，存入待定案報告（取代先前未定案的報告）
    pub fn complete_opname(&mut self, report: OpnameReport) {
        tracing::info!(
            "盤點完成: {}（{}），{} 筆品項",
            report.store_name,
            report.formatted_date(),
            report.items.len()
        );
        self.pending = Some(report);
    }

    /// 待定案報告
    pub fn pending_report(&self) -> Option<&OpnameReport> {
        self.pending.as_ref()
    }

    /// 捨棄待定案報告（離開報告頁面而未定案）
    pub fn discard(&mut self) -> Option<OpnameReport> {
        self.pending.take()
    }

    /// 定案：套用待定案報告並清空會話
    ///
    /// 報告僅會被消費一次，重複定案回傳 `NoPendingReport`。
    pub fn finalize(&mut self, stores: &[Store]) -> Result<Vec<Store>> {
        let report = self.pending.take().ok_or(OpnameError::NoPendingReport)?;
        tracing::info!("定案盤點報告: {}", report.store_name);
        Ok(apply_report(stores, &report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;
    use crate::session::{begin_opname, record_count};
    use chrono::NaiveDate;
    use opname_core::{
        AssetCategory, AssetDraft, ItemDraft, MerchandiseCategory, MerchandiseDraft,
    };
    use rust_decimal::Decimal;

    fn two_stores() -> Vec<Store> {
        let mut toko_a = Store::new("Toko A", "Jl. Merdeka No. 12");
        toko_a.inventory.push(
            ItemDraft::Merchandise(
                MerchandiseDraft::new(
                    "Beras Super 5kg",
                    MerchandiseCategory::Sembako,
                    Decimal::from(65000),
                    Decimal::from(68000),
                )
                .with_expected_stock(50),
            )
            .build()
            .unwrap(),
        );
        toko_a.inventory.push(
            ItemDraft::Asset(
                AssetDraft::new(
                    "Timbangan Digital",
                    AssetCategory::Elektronik,
                    Decimal::from(350000),
                )
                .with_quantity(1),
            )
            .build()
            .unwrap(),
        );

        let mut toko_b = Store::new("Toko B", "Jl. Pahlawan No. 45");
        toko_b.inventory.push(
            ItemDraft::Merchandise(
                MerchandiseDraft::new(
                    "Gula Pasir 1kg",
                    MerchandiseCategory::Sembako,
                    Decimal::from(14000),
                    Decimal::from(15500),
                )
                .with_expected_stock(80),
            )
            .build()
            .unwrap(),
        );

        vec![toko_a, toko_b]
    }

    fn report_for(stores: &[Store], count: &str) -> OpnameReport {
        let mut items = begin_opname(&stores[0]);
        let id = items[0].item.id;
        record_count(&mut items, id, count).unwrap();
        build_report(
            &stores[0],
            items,
            NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_apply_report_updates_only_target() {
        let stores = two_stores();
        let report = report_for(&stores, "47");

        let updated = apply_report(&stores, &report);

        // 目標品項：帳面 50 → 47
        assert_eq!(updated[0].inventory[0].expected_stock, 47);
        // 固定資產不變
        assert_eq!(updated[0].inventory[1].expected_stock, 1);
        // 其他門市不變
        assert_eq!(updated[1].inventory[0].expected_stock, 80);
        // 輸入清單未被修改
        assert_eq!(stores[0].inventory[0].expected_stock, 50);
    }

    #[test]
    fn test_apply_report_idempotent() {
        let stores = two_stores();
        let report = report_for(&stores, "47");

        let once = apply_report(&stores, &report);
        let twice = apply_report(&once, &report);
        assert_eq!(
            once[0].inventory[0].expected_stock,
            twice[0].inventory[0].expected_stock
        );
    }

    #[test]
    fn test_null_count_keeps_existing_stock() {
        let stores = two_stores();
        // 未輸入數量即凍結報告（防禦性情境）
        let items = begin_opname(&stores[0]);
        let report = build_report(
            &stores[0],
            items,
            NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
        )
        .unwrap();

        let updated = apply_report(&stores, &report);
        assert_eq!(updated[0].inventory[0].expected_stock, 50);
    }

    #[test]
    fn test_session_finalize_consumes_report() {
        let stores = two_stores();
        let report = report_for(&stores, "47");

        let mut session = SessionState::new();
        assert!(session.pending_report().is_none());

        session.complete_opname(report);
        assert!(session.pending_report().is_some());

        let updated = session.finalize(&stores).unwrap();
        assert_eq!(updated[0].inventory[0].expected_stock, 47);

        // 報告已被消費，重複定案失敗
        assert!(session.pending_report().is_none());
        assert!(matches!(
            session.finalize(&stores),
            Err(OpnameError::NoPendingReport)
        ));
    }

    #[test]
    fn test_session_discard() {
        let stores = two_stores();
        let mut session = SessionState::new();
        session.complete_opname(report_for(&stores, "47"));

        assert!(session.discard().is_some());
        assert!(session.pending_report().is_none());
        assert!(session.finalize(&stores).is_err());
    }
}
