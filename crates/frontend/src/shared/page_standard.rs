//! Page category constants for page standardization.
//!
//! Every page must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a025_production_order--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a025_production_order/` directory.

/// List of records, optionally with an inline creation form.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a025_production_order--list"));
        assert!(!is_valid_page_id("a025_production_order"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a025_production_order--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category(PAGE_CAT_LIST));
        assert!(!is_known_category("dashboard"));
    }
}
