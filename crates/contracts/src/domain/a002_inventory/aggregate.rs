use crate::domain::common::AggregateRoot;
use crate::enums::StockOperation;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WAREHOUSE: &str = "主仓库";

/// Складская партия (`GET /inventory/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_code: Option<String>,
    pub warehouse: String,
    #[serde(default)]
    pub batch_number: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AggregateRoot for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        self.product_code.as_deref().unwrap_or(&self.product_id)
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "inventory"
    }

    fn element_name() -> &'static str {
        "库存"
    }

    fn list_name() -> &'static str {
        "库存管理"
    }
}

/// Тело запроса создания/изменения партии
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryDto {
    pub product_id: String,
    pub warehouse: String,
    pub batch_number: Option<String>,
    pub quantity: i64,
    pub unit_price: f64,
    pub location: Option<String>,
}

impl Default for InventoryDto {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            warehouse: DEFAULT_WAREHOUSE.to_string(),
            batch_number: None,
            quantity: 0,
            unit_price: 0.0,
            location: None,
        }
    }
}

impl From<InventoryItem> for InventoryDto {
    fn from(i: InventoryItem) -> Self {
        Self {
            product_id: i.product_id,
            warehouse: i.warehouse,
            batch_number: i.batch_number,
            quantity: i.quantity,
            unit_price: i.unit_price,
            location: i.location,
        }
    }
}

/// Тело `POST /inventory/in` и `POST /inventory/out`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovementRequest {
    pub product_id: String,
    pub inventory_id: String,
    pub operation_type: StockOperation,
    pub quantity: i64,
    pub batch_number: Option<String>,
    pub remark: Option<String>,
}

impl StockMovementRequest {
    pub fn for_item(item: &InventoryItem, operation: StockOperation, quantity: i64) -> Self {
        Self {
            product_id: item.product_id.clone(),
            inventory_id: item.id.clone(),
            operation_type: operation,
            quantity,
            batch_number: item.batch_number.clone(),
            remark: None,
        }
    }
}

/// Запись движения по складу, которую backend возвращает после операции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovementRecord {
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub product_name: Option<String>,
    pub inventory_id: String,
    pub operation_type: String,
    pub quantity: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}
