//! SKU attribute extraction.
//!
//! Sellers encode fulfilment and pack-size information in SKU suffixes like
//! `"BGS01 - 2 Prime"`. These helpers recover the Prime flag, the base SKU,
//! and the leading-letters category the analysis scripts group by.

/// Whether the SKU marks a Prime (fast-shipping) listing.
pub fn is_prime(sku: &str) -> bool {
    sku.to_ascii_lowercase().contains("prime")
}

/// The SKU with a trailing `" - <digits> Prime"` or `" Prime"` suffix removed.
pub fn base_sku(sku: &str) -> String {
    let trimmed = sku.trim_end();
    if let Some(stripped) = strip_pack_prime_suffix(trimmed) {
        return stripped;
    }
    if let Some(stripped) = trimmed.strip_suffix(" Prime") {
        return stripped.to_string();
    }
    trimmed.to_string()
}

fn strip_pack_prime_suffix(sku: &str) -> Option<String> {
    let without_prime = sku.strip_suffix(" Prime")?;
    let idx = without_prime.rfind(" - ")?;
    let digits = &without_prime[idx + 3..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(without_prime[..idx].to_string())
}

/// The leading run of ASCII uppercase letters, used as a coarse category.
pub fn sku_category(sku: &str) -> Option<String> {
    let category: String = sku
        .chars()
        .take_while(char::is_ascii_uppercase)
        .collect();
    if category.is_empty() { None } else { Some(category) }
}
