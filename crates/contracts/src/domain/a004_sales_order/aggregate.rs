use crate::domain::common::AggregateRoot;
use crate::enums::order_status::FALLBACK_STATUS_CLASS;
use crate::enums::SalesOrderStatus;
use serde::{Deserialize, Serialize};

/// Строка заказа на продажу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderItem {
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(default)]
    pub shipped_quantity: i64,
    #[serde(default)]
    pub remark: Option<String>,
}

impl SalesOrderItem {
    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Заказ на продажу (`GET /sales/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    pub id: String,
    pub order_number: String,
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub items: Vec<SalesOrderItem>,
    #[serde(default)]
    pub total_amount: f64,
    pub status: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub expected_date: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl SalesOrder {
    pub fn status_kind(&self) -> Option<SalesOrderStatus> {
        SalesOrderStatus::from_label(&self.status)
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

impl AggregateRoot for SalesOrder {
    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.order_number
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "sales"
    }

    fn element_name() -> &'static str {
        "销售订单"
    }

    fn list_name() -> &'static str {
        "销售管理"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let json = r#"{
            "id": "1",
            "order_number": "SO20240315120000",
            "customer_id": "c1",
            "status": "冻结",
            "items": [{"product_id": "p1", "quantity": 2, "unit_price": 10.5}]
        }"#;
        let order: SalesOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, "冻结");
        assert_eq!(order.status_kind(), None);
        assert!(!order.can_approve());
        assert_eq!(order.status_class(), "draft");
        assert_eq!(order.items[0].shipped_quantity, 0);
        assert_eq!(order.items[0].line_total(), 21.0);
    }
}
