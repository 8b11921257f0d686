use crate::domain::common::AggregateRoot;
use crate::enums::order_status::FALLBACK_STATUS_CLASS;
use crate::enums::PurchaseOrderStatus;
use serde::{Deserialize, Serialize};

/// Строка заказа на закупку
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(default)]
    pub received_quantity: i64,
    #[serde(default)]
    pub remark: Option<String>,
}

impl PurchaseOrderItem {
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Заказ на закупку (`GET /purchases/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub order_number: String,
    pub supplier_id: String,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub items: Vec<PurchaseOrderItem>,
    #[serde(default)]
    pub total_amount: f64,
    pub status: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub expected_date: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl PurchaseOrder {
    pub fn status_kind(&self) -> Option<PurchaseOrderStatus> {
        PurchaseOrderStatus::from_label(&self.status)
    }

    /// CSS class of the status badge; unknown statuses render as draft
    pub fn status_class(&self) -> &'static str {
        self.status_kind()
            .map(|s| s.css_class())
            .unwrap_or(FALLBACK_STATUS_CLASS)
    }

    pub fn can_approve(&self) -> bool {
        self.status_kind().map(|s| s.can_approve()).unwrap_or(false)
    }
}

impl AggregateRoot for PurchaseOrder {
    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.order_number
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "purchases"
    }

    fn element_name() -> &'static str {
        "采购订单"
    }

    fn list_name() -> &'static str {
        "采购管理"
    }
}
