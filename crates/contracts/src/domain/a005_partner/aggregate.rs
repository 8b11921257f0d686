use crate::domain::common::AggregateRoot;
use crate::enums::PartnerType;
use serde::{Deserialize, Serialize};

/// Контрагент: поставщик и/или клиент (`GET /partners/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub partner_code: String,
    pub name: String,
    pub partner_type: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Partner {
    pub fn partner_type_kind(&self) -> Option<PartnerType> {
        PartnerType::from_label(&self.partner_type)
    }
}

impl AggregateRoot for Partner {
    fn id(&self) -> &str {
        &self.id
    }

    fn code(&self) -> &str {
        &self.partner_code
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "partners"
    }

    fn element_name() -> &'static str {
        "合作伙伴"
    }

    fn list_name() -> &'static str {
        "合作伙伴管理"
    }
}

/// Тело запроса создания/изменения контрагента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerDto {
    pub partner_code: String,
    pub name: String,
    pub partner_type: PartnerType,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub remark: Option<String>,
}

impl Default for PartnerDto {
    fn default() -> Self {
        Self {
            partner_code: String::new(),
            name: String::new(),
            partner_type: PartnerType::Supplier,
            contact_person: None,
            phone: None,
            email: None,
            address: None,
            remark: None,
        }
    }
}

impl From<Partner> for PartnerDto {
    fn from(p: Partner) -> Self {
        Self {
            partner_type: p.partner_type_kind().unwrap_or(PartnerType::Supplier),
            partner_code: p.partner_code,
            name: p.name,
            contact_person: p.contact_person,
            phone: p.phone,
            email: p.email,
            address: p.address,
            remark: p.remark,
        }
    }
}
