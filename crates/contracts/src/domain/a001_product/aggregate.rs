use crate::domain::common::AggregateRoot;
use crate::enums::ProductType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_UNIT: &str = "个";

/// Продукт в том виде, в каком его отдаёт `GET /products/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub product_code: String,
    pub name: String,
    pub product_type: String,
    #[serde(default)]
    pub specification: Option<String>,
    pub unit: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub storage_conditions: Option<String>,
    #[serde(default)]
    pub shelf_life: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Product {
    pub fn product_type_kind(&self) -> Option<ProductType> {
        ProductType::from_label(&self.product_type)
    }
}

impl AggregateRoot for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.product_code
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "产品"
    }

    fn list_name() -> &'static str {
        "产品管理"
    }
}

/// Тело запроса создания/изменения продукта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub product_code: String,
    pub name: String,
    pub product_type: ProductType,
    pub specification: Option<String>,
    pub unit: String,
    pub storage_conditions: Option<String>,
    pub description: Option<String>,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            product_code: String::new(),
            name: String::new(),
            product_type: ProductType::Protein,
            specification: None,
            unit: DEFAULT_UNIT.to_string(),
            storage_conditions: None,
            description: None,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            product_type: p.product_type_kind().unwrap_or(ProductType::Other),
            product_code: p.product_code,
            name: p.name,
            specification: p.specification,
            unit: p.unit,
            storage_conditions: p.storage_conditions,
            description: p.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_record_with_missing_optionals() {
        let json = r#"{
            "id": "65f1c0",
            "product_code": "P-001",
            "name": "Recombinant IL-6",
            "product_type": "蛋白",
            "unit": "支"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_type_kind(), Some(ProductType::Protein));
        assert!(product.specification.is_none());
        assert_eq!(Product::item_path(&product.id), "/products/65f1c0");
    }

    #[test]
    fn dto_sends_null_for_empty_optionals() {
        let dto = ProductDto {
            product_code: "P-002".into(),
            name: "Anti-CD3".into(),
            product_type: ProductType::Antibody,
            ..ProductDto::default()
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["product_type"], "抗体");
        assert_eq!(value["unit"], "个");
        assert!(value["specification"].is_null());
    }
}
