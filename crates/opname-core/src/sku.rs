//! SKU 產生器

use uuid::Uuid;

use crate::item::Category;

/// 產生 SKU：`<分類代碼>-<名稱縮寫>-<唯一尾碼>`
///
/// 名稱縮寫取前三個單詞的首字母（大寫）；名稱無法取縮寫時省略該段。
pub fn generate(category: &Category, name: &str) -> String {
    let code = category.code();
    let initials: String = name
        .split_whitespace()
        .take(3)
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase();
    let suffix = unique_suffix();

    if initials.is_empty() {
        format!("{code}-{suffix}")
    } else {
        format!("{code}-{initials}-{suffix}")
    }
}

/// 隨機 5 位尾碼（UUID 為來源，快速連續建立也不會碰撞）
fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..5].to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{AssetCategory, MerchandiseCategory};

    #[test]
    fn test_sku_format() {
        let sku = generate(
            &Category::Merchandise(MerchandiseCategory::Sembako),
            "Beras Super 5kg",
        );
        let parts: Vec<&str> = sku.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "SMBK");
        assert_eq!(parts[1], "BS5");
        assert_eq!(parts[2].len(), 5);
    }

    #[test]
    fn test_sku_without_initials() {
        let sku = generate(&Category::Asset(AssetCategory::Elektronik), "   ");
        let parts: Vec<&str> = sku.split('-').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "ELK");
    }

    #[test]
    fn test_sku_initials_capped_at_three_words() {
        let sku = generate(
            &Category::Merchandise(MerchandiseCategory::Minuman),
            "kopi sachet renteng besar",
        );
        assert!(sku.starts_with("MNMN-KSR-"));
    }

    #[test]
    fn test_sku_suffix_unique() {
        let category = Category::Merchandise(MerchandiseCategory::Lainnya);
        let a = generate(&category, "Item");
        let b = generate(&category, "Item");
        assert_ne!(a, b);
    }
}
