//! 品項模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sku;
use crate::{OpnameError, Result};

/// 品項種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// 販售商品
    Merchandise,
    /// 固定資產（盤點時不計數）
    FixedAsset,
}

impl ItemKind {
    /// 匯入/匯出檔案使用的標籤
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Merchandise => "BARANG",
            ItemKind::FixedAsset => "ASET_TETAP",
        }
    }

    /// 從標籤解析（不區分大小寫）
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_uppercase().as_str() {
            "BARANG" => Some(ItemKind::Merchandise),
            "ASET_TETAP" => Some(ItemKind::FixedAsset),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 商品分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MerchandiseCategory {
    Sembako,
    Makanan,
    Minuman,
    Rokok,
    Cemilan,
    RempahSerbuk,
    RempahCair,
    Obat,
    BahanBakar,
    Lainnya,
}

impl MerchandiseCategory {
    pub const ALL: [MerchandiseCategory; 10] = [
        MerchandiseCategory::Sembako,
        MerchandiseCategory::Makanan,
        MerchandiseCategory::Minuman,
        MerchandiseCategory::Rokok,
        MerchandiseCategory::Cemilan,
        MerchandiseCategory::RempahSerbuk,
        MerchandiseCategory::RempahCair,
        MerchandiseCategory::Obat,
        MerchandiseCategory::BahanBakar,
        MerchandiseCategory::Lainnya,
    ];

    /// 顯示標籤（印尼文）
    pub fn label(&self) -> &'static str {
        match self {
            MerchandiseCategory::Sembako => "Sembako",
            MerchandiseCategory::Makanan => "Makanan",
            MerchandiseCategory::Minuman => "Minuman",
            MerchandiseCategory::Rokok => "Rokok",
            MerchandiseCategory::Cemilan => "Cemilan",
            MerchandiseCategory::RempahSerbuk => "Rempah Serbuk",
            MerchandiseCategory::RempahCair => "Rempah Cair",
            MerchandiseCategory::Obat => "Obat",
            MerchandiseCategory::BahanBakar => "Bahan Bakar",
            MerchandiseCategory::Lainnya => "Lainnya",
        }
    }

    /// SKU 分類代碼
    pub fn code(&self) -> &'static str {
        match self {
            MerchandiseCategory::Sembako => "SMBK",
            MerchandiseCategory::Makanan => "MKNN",
            MerchandiseCategory::Minuman => "MNMN",
            MerchandiseCategory::Rokok => "RKK",
            MerchandiseCategory::Cemilan => "CMLN",
            MerchandiseCategory::RempahSerbuk => "RMPS",
            MerchandiseCategory::RempahCair => "RMPC",
            MerchandiseCategory::Obat => "OBT",
            MerchandiseCategory::BahanBakar => "BBKR",
            MerchandiseCategory::Lainnya => "LLN",
        }
    }

    /// 從顯示標籤解析
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for MerchandiseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 資產分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetCategory {
    Elektronik,
    Mebel,
    AsetDiam,
    AsetBergerak,
    Lainnya,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Elektronik,
        AssetCategory::Mebel,
        AssetCategory::AsetDiam,
        AssetCategory::AsetBergerak,
        AssetCategory::Lainnya,
    ];

    /// 顯示標籤（印尼文）
    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::Elektronik => "Elektronik",
            AssetCategory::Mebel => "Mebel",
            AssetCategory::AsetDiam => "Aset Diam",
            AssetCategory::AsetBergerak => "Aset Bergerak",
            AssetCategory::Lainnya => "Lainnya",
        }
    }

    /// SKU 分類代碼
    pub fn code(&self) -> &'static str {
        match self {
            AssetCategory::Elektronik => "ELK",
            AssetCategory::Mebel => "MBL",
            AssetCategory::AsetDiam => "AD",
            AssetCategory::AsetBergerak => "AB",
            AssetCategory::Lainnya => "LLN",
        }
    }

    /// 從顯示標籤解析
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 品項分類
///
/// 商品與資產各自使用封閉的分類集合，品項種類由分類推導，
/// 不可能出現種類與分類不一致的品項。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Merchandise(MerchandiseCategory),
    Asset(AssetCategory),
}

impl Category {
    /// 所屬品項種類
    pub fn kind(&self) -> ItemKind {
        match self {
            Category::Merchandise(_) => ItemKind::Merchandise,
            Category::Asset(_) => ItemKind::FixedAsset,
        }
    }

    /// 顯示標籤
    pub fn label(&self) -> &'static str {
        match self {
            Category::Merchandise(c) => c.label(),
            Category::Asset(c) => c.label(),
        }
    }

    /// SKU 分類代碼
    pub fn code(&self) -> &'static str {
        match self {
            Category::Merchandise(c) => c.code(),
            Category::Asset(c) => c.code(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 計量單位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Pcs,
    Kg,
    Gram,
    Ltr,
    Ml,
    Botol,
    Karton,
    Dus,
    Renteng,
    Bungkus,
    Lainnya,
}

impl Unit {
    pub const ALL: [Unit; 11] = [
        Unit::Pcs,
        Unit::Kg,
        Unit::Gram,
        Unit::Ltr,
        Unit::Ml,
        Unit::Botol,
        Unit::Karton,
        Unit::Dus,
        Unit::Renteng,
        Unit::Bungkus,
        Unit::Lainnya,
    ];

    /// 顯示標籤
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Pcs => "Pcs",
            Unit::Kg => "Kg",
            Unit::Gram => "Gram",
            Unit::Ltr => "Ltr",
            Unit::Ml => "Ml",
            Unit::Botol => "Botol",
            Unit::Karton => "Karton",
            Unit::Dus => "Dus",
            Unit::Renteng => "Renteng",
            Unit::Bungkus => "Bungkus",
            Unit::Lainnya => "Lainnya",
        }
    }

    /// 從顯示標籤解析
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 庫存品項
///
/// `id`、`sku` 與品項種類在建立後不再變更。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// 品項 ID
    pub id: Uuid,

    /// 名稱
    pub name: String,

    /// SKU 編碼（建立時自動產生）
    pub sku: String,

    /// 分類（依種類封閉）
    pub category: Category,

    /// 進價
    pub purchase_price: Decimal,

    /// 售價（固定資產恆為 0）
    pub selling_price: Decimal,

    /// 系統帳面庫存
    pub expected_stock: u32,

    /// 計量單位
    pub unit: Unit,

    /// 購入日期（僅固定資產）
    pub purchase_date: Option<NaiveDate>,

    /// 備註（僅固定資產）
    pub notes: Option<String>,
}

impl InventoryItem {
    /// 品項種類（由分類推導）
    pub fn kind(&self) -> ItemKind {
        self.category.kind()
    }
}

/// 商品草稿
///
/// 所有欄位經 `validate` 通過後才能建立品項。
#[derive(Debug, Clone)]
pub struct MerchandiseDraft {
    pub name: String,
    pub category: MerchandiseCategory,
    pub purchase_price: Decimal,
    pub selling_price: Decimal,
    pub expected_stock: u32,
    pub unit: Unit,
}

impl MerchandiseDraft {
    /// 創建新的商品草稿
    pub fn new(
        name: impl Into<String>,
        category: MerchandiseCategory,
        purchase_price: Decimal,
        selling_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            purchase_price,
            selling_price,
            expected_stock: 0,
            unit: Unit::Pcs,
        }
    }

    /// 建構器模式：設置初始庫存
    pub fn with_expected_stock(mut self, stock: u32) -> Self {
        self.expected_stock = stock;
        self
    }

    /// 建構器模式：設置單位
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }
}

/// 固定資產草稿
#[derive(Debug, Clone)]
pub struct AssetDraft {
    pub name: String,
    pub category: AssetCategory,
    pub purchase_price: Decimal,
    /// 資產數量（預設 1）
    pub quantity: u32,
    pub purchase_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl AssetDraft {
    /// 創建新的資產草稿
    pub fn new(name: impl Into<String>, category: AssetCategory, purchase_price: Decimal) -> Self {
        Self {
            name: name.into(),
            category,
            purchase_price,
            quantity: 1,
            purchase_date: None,
            notes: None,
        }
    }

    /// 建構器模式：設置數量
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// 建構器模式：設置購入日期
    pub fn with_purchase_date(mut self, date: NaiveDate) -> Self {
        self.purchase_date = Some(date);
        self
    }

    /// 建構器模式：設置備註
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// 品項草稿（依種類封閉）
#[derive(Debug, Clone)]
pub enum ItemDraft {
    Merchandise(MerchandiseDraft),
    Asset(AssetDraft),
}

impl ItemDraft {
    /// 草稿的品項種類
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDraft::Merchandise(_) => ItemKind::Merchandise,
            ItemDraft::Asset(_) => ItemKind::FixedAsset,
        }
    }

    /// 驗證草稿欄位
    ///
    /// 商品：名稱非空、價格非負、售價不低於進價。
    /// 資產：名稱非空、進價非負。
    pub fn validate(&self) -> Result<()> {
        match self {
            ItemDraft::Merchandise(draft) => {
                if draft.name.trim().is_empty() {
                    return Err(OpnameError::Validation("品項名稱不可為空".to_string()));
                }
                if draft.purchase_price < Decimal::ZERO || draft.selling_price < Decimal::ZERO {
                    return Err(OpnameError::Validation("價格不可為負數".to_string()));
                }
                if draft.selling_price < draft.purchase_price {
                    return Err(OpnameError::Validation(
                        "售價不可低於進價".to_string(),
                    ));
                }
            }
            ItemDraft::Asset(draft) => {
                if draft.name.trim().is_empty() {
                    return Err(OpnameError::Validation("資產名稱不可為空".to_string()));
                }
                if draft.purchase_price < Decimal::ZERO {
                    return Err(OpnameError::Validation("購入價格不可為負數".to_string()));
                }
            }
        }
        Ok(())
    }

    /// 驗證並建立品項（產生 ID 與 SKU）
    ///
    /// 固定資產的售價固定為 0、單位固定為基本單位（Pcs）。
    pub fn build(self) -> Result<InventoryItem> {
        self.validate()?;
        let item = match self {
            ItemDraft::Merchandise(draft) => {
                let category = Category::Merchandise(draft.category);
                InventoryItem {
                    id: Uuid::new_v4(),
                    sku: sku::generate(&category, &draft.name),
                    name: draft.name,
                    category,
                    purchase_price: draft.purchase_price,
                    selling_price: draft.selling_price,
                    expected_stock: draft.expected_stock,
                    unit: draft.unit,
                    purchase_date: None,
                    notes: None,
                }
            }
            ItemDraft::Asset(draft) => {
                let category = Category::Asset(draft.category);
                InventoryItem {
                    id: Uuid::new_v4(),
                    sku: sku::generate(&category, &draft.name),
                    name: draft.name,
                    category,
                    purchase_price: draft.purchase_price,
                    selling_price: Decimal::ZERO,
                    expected_stock: draft.quantity,
                    unit: Unit::Pcs,
                    purchase_date: draft.purchase_date,
                    notes: draft.notes,
                }
            }
        };
        Ok(item)
    }

    /// 驗證並套用到既有品項
    ///
    /// `id`、`sku` 保持不變；種類不可變更。
    pub fn apply_to(&self, item: &mut InventoryItem) -> Result<()> {
        self.validate()?;
        if self.kind() != item.kind() {
            return Err(OpnameError::Validation(
                "品項種類建立後不可變更".to_string(),
            ));
        }
        match self {
            ItemDraft::Merchandise(draft) => {
                item.name = draft.name.clone();
                item.category = Category::Merchandise(draft.category);
                item.purchase_price = draft.purchase_price;
                item.selling_price = draft.selling_price;
                item.expected_stock = draft.expected_stock;
                item.unit = draft.unit;
            }
            ItemDraft::Asset(draft) => {
                item.name = draft.name.clone();
                item.category = Category::Asset(draft.category);
                item.purchase_price = draft.purchase_price;
                item.selling_price = Decimal::ZERO;
                item.expected_stock = draft.quantity;
                item.unit = Unit::Pcs;
                item.purchase_date = draft.purchase_date;
                item.notes = draft.notes.clone();
            }
        }
        Ok(())
    }
}
