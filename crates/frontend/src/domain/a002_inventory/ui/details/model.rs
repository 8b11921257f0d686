use contracts::domain::a002_inventory::aggregate::{InventoryDto, InventoryItem, DEFAULT_WAREHOUSE};

use crate::domain::common::form::{require, RecordForm};
use crate::shared::forms::{optional, parse_or};

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryForm {
    pub product_id: String,
    pub warehouse: String,
    pub batch_number: String,
    pub quantity: String,
    pub unit_price: String,
    pub location: String,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            warehouse: DEFAULT_WAREHOUSE.to_string(),
            batch_number: String::new(),
            quantity: "0".to_string(),
            unit_price: "0".to_string(),
            location: String::new(),
        }
    }
}

impl RecordForm for InventoryForm {
    type Record = InventoryItem;
    type Dto = InventoryDto;

    fn from_record(item: InventoryItem) -> Self {
        let dto = InventoryDto::from(item);
        Self {
            product_id: dto.product_id,
            warehouse: dto.warehouse,
            batch_number: dto.batch_number.unwrap_or_default(),
            quantity: dto.quantity.to_string(),
            unit_price: dto.unit_price.to_string(),
            location: dto.location.unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        require(&[("产品ID", &self.product_id)])
    }

    fn to_dto(&self) -> InventoryDto {
        InventoryDto {
            product_id: self.product_id.trim().to_string(),
            warehouse: optional(&self.warehouse).unwrap_or_else(|| DEFAULT_WAREHOUSE.to_string()),
            batch_number: optional(&self.batch_number),
            quantity: parse_or(&self.quantity, 0),
            unit_price: parse_or(&self.unit_price, 0.0),
            location: optional(&self.location),
        }
    }
}
