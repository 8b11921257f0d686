use serde::{Deserialize, Serialize};

/// Счётчики записей для карточек дашборда
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewCounts {
    pub products: usize,
    pub inventory: usize,
    pub purchases: usize,
    pub sales: usize,
}
