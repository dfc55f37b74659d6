//! 盤點報告

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use opname_core::{OpnameError, Result, Store};

use crate::session::OpnameItem;

/// 印尼文月份名稱
const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// 盤點報告
///
/// 不可變快照：門市識別與品項皆為複本，
/// 報告產生後的門市變更不會影響報告內容。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpnameReport {
    /// 門市 ID（複本）
    pub store_id: Uuid,

    /// 門市名稱（複本）
    pub store_name: String,

    /// 盤點日期
    pub opname_date: NaiveDate,

    /// 品項快照（含差異），順序與盤點清單一致
    pub items: Vec<OpnameItem>,
}

impl OpnameReport {
    /// 盤點日期的印尼文顯示格式，如 `27 Agustus 2026`
    pub fn formatted_date(&self) -> String {
        format!(
            "{} {} {}",
            self.opname_date.day(),
            MONTHS_ID[self.opname_date.month0() as usize],
            self.opname_date.year()
        )
    }

    /// 有差異的品項（差異不為 0）
    pub fn discrepancies(&self) -> impl Iterator<Item = &OpnameItem> {
        self.items.iter().filter(|entry| entry.variance != 0)
    }

    /// 是否存在任何差異
    pub fn has_discrepancy(&self) -> bool {
        self.discrepancies().next().is_some()
    }
}

/// 將盤點清單凍結為報告
///
/// 防禦性檢查：清單中的每一筆都必須屬於該門市的商品集合，
/// 正確的盤點流程不會觸發此錯誤。
pub fn build_report(
    store: &Store,
    items: Vec<OpnameItem>,
    opname_date: NaiveDate,
) -> Result<OpnameReport> {
    for entry in &items {
        let belongs = store
            .merchandise()
            .any(|item| item.id == entry.item.id);
        if !belongs {
            return Err(OpnameError::ForeignItem(entry.item.id));
        }
    }

    tracing::debug!(
        "門市 {} 產生盤點報告，共 {} 筆、{} 筆有差異",
        store.name,
        items.len(),
        items.iter().filter(|entry| entry.variance != 0).count()
    );

    Ok(OpnameReport {
        store_id: store.id,
        store_name: store.name.clone(),
        opname_date,
        items,
    })
}
