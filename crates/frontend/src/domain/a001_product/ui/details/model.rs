use contracts::domain::a001_product::aggregate::{Product, ProductDto, DEFAULT_UNIT};
use contracts::enums::ProductType;

use crate::domain::common::form::{require, RecordForm};
use crate::shared::forms::optional;

/// Product form as typed
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub product_code: String,
    pub name: String,
    pub product_type: ProductType,
    pub specification: String,
    pub unit: String,
    pub storage_conditions: String,
    pub description: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            product_code: String::new(),
            name: String::new(),
            product_type: ProductType::Protein,
            specification: String::new(),
            unit: DEFAULT_UNIT.to_string(),
            storage_conditions: String::new(),
            description: String::new(),
        }
    }
}

impl RecordForm for ProductForm {
    type Record = Product;
    type Dto = ProductDto;

    fn from_record(p: Product) -> Self {
        let dto = ProductDto::from(p);
        Self {
            product_code: dto.product_code,
            name: dto.name,
            product_type: dto.product_type,
            specification: dto.specification.unwrap_or_default(),
            unit: dto.unit,
            storage_conditions: dto.storage_conditions.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        require(&[("产品编号", &self.product_code), ("产品名称", &self.name)])
    }

    fn to_dto(&self) -> ProductDto {
        ProductDto {
            product_code: self.product_code.trim().to_string(),
            name: self.name.trim().to_string(),
            product_type: self.product_type,
            specification: optional(&self.specification),
            unit: optional(&self.unit).unwrap_or_else(|| DEFAULT_UNIT.to_string()),
            storage_conditions: optional(&self.storage_conditions),
            description: optional(&self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optionals_become_null_and_unit_defaults() {
        let form = ProductForm {
            product_code: " P-001 ".into(),
            name: "Recombinant IL-6".into(),
            product_type: ProductType::Protein,
            unit: "".into(),
            ..ProductForm::default()
        };
        assert!(form.validate().is_ok());

        let dto = form.to_dto();
        assert_eq!(dto.product_code, "P-001");
        assert_eq!(dto.unit, "个");
        assert_eq!(dto.specification, None);
        assert_eq!(dto.description, None);
    }

    #[test]
    fn code_and_name_are_required() {
        let err = ProductForm::default().validate().unwrap_err();
        assert!(err.contains("产品编号"));
        assert!(err.contains("产品名称"));
    }

    #[test]
    fn loads_record_with_unknown_type_as_other() {
        let product: Product = serde_json::from_str(
            r#"{"id":"1","product_code":"X","name":"Y","product_type":"细胞","unit":"瓶","specification":"1mg"}"#,
        )
        .unwrap();
        let form = ProductForm::from_record(product);
        assert_eq!(form.product_type, ProductType::Other);
        assert_eq!(form.specification, "1mg");
        assert_eq!(form.storage_conditions, "");
    }
}
