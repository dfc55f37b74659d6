//! 營運費用模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{OpnameError, Result};

/// 費用週期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostPeriod {
    /// 每月
    Monthly,
    /// 每年
    Yearly,
    /// 一次性
    OneTime,
}

impl CostPeriod {
    pub const ALL: [CostPeriod; 3] = [CostPeriod::Monthly, CostPeriod::Yearly, CostPeriod::OneTime];

    /// 顯示標籤（印尼文）
    pub fn label(&self) -> &'static str {
        match self {
            CostPeriod::Monthly => "Bulanan",
            CostPeriod::Yearly => "Tahunan",
            CostPeriod::OneTime => "Sekali Bayar",
        }
    }

    /// 從顯示標籤解析
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl std::fmt::Display for CostPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 營運費用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalCost {
    /// 費用 ID
    pub id: Uuid,

    /// 名稱
    pub name: String,

    /// 金額
    pub amount: Decimal,

    /// 週期
    pub period: CostPeriod,
}

/// 費用草稿
#[derive(Debug, Clone)]
pub struct CostDraft {
    pub name: String,
    pub amount: Decimal,
    pub period: CostPeriod,
}

impl CostDraft {
    /// 創建新的費用草稿
    pub fn new(name: impl Into<String>, amount: Decimal, period: CostPeriod) -> Self {
        Self {
            name: name.into(),
            amount,
            period,
        }
    }

    /// 驗證草稿欄位：名稱非空、金額為正數
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(OpnameError::Validation("費用名稱不可為空".to_string()));
        }
        if self.amount <= Decimal::ZERO {
            return Err(OpnameError::Validation("費用金額必須為正數".to_string()));
        }
        Ok(())
    }

    /// 驗證並建立費用項目
    pub fn build(self) -> Result<OperationalCost> {
        self.validate()?;
        Ok(OperationalCost {
            id: Uuid::new_v4(),
            name: self.name,
            amount: self.amount,
            period: self.period,
        })
    }

    /// 驗證並套用到既有費用項目（`id` 保持不變）
    pub fn apply_to(&self, cost: &mut OperationalCost) -> Result<()> {
        self.validate()?;
        cost.name = self.name.clone();
        cost.amount = self.amount;
        cost.period = self.period;
        Ok(())
    }
}
