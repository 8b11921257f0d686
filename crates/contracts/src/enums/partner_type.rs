use serde::{Deserialize, Serialize};

/// Тип контрагента: поставщик, клиент или оба сразу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerType {
    #[serde(rename = "供应商")]
    Supplier,
    #[serde(rename = "客户")]
    Customer,
    #[serde(rename = "供应商/客户")]
    Both,
}

impl PartnerType {
    pub fn label(&self) -> &'static str {
        match self {
            PartnerType::Supplier => "供应商",
            PartnerType::Customer => "客户",
            PartnerType::Both => "供应商/客户",
        }
    }

    pub fn all() -> Vec<PartnerType> {
        vec![PartnerType::Supplier, PartnerType::Customer, PartnerType::Both]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.label() == label)
    }
}
