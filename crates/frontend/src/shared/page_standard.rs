//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_product--list"`) and `data-page-category` with one of the
//! constants below.

/// List of records
pub const PAGE_CAT_LIST: &str = "list";

/// Summary / stat cards
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login and other pages outside the shell
pub const PAGE_CAT_SYSTEM: &str = "system";
