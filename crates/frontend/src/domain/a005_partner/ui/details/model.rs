use contracts::domain::a005_partner::aggregate::{Partner, PartnerDto};
use contracts::enums::PartnerType;

use crate::domain::common::form::{require, RecordForm};
use crate::shared::forms::optional;

#[derive(Debug, Clone, PartialEq)]
pub struct PartnerForm {
    pub partner_code: String,
    pub name: String,
    pub partner_type: PartnerType,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub remark: String,
}

impl Default for PartnerForm {
    fn default() -> Self {
        Self {
            partner_code: String::new(),
            name: String::new(),
            partner_type: PartnerType::Supplier,
            contact_person: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            remark: String::new(),
        }
    }
}

impl RecordForm for PartnerForm {
    type Record = Partner;
    type Dto = PartnerDto;

    fn from_record(p: Partner) -> Self {
        let dto = PartnerDto::from(p);
        Self {
            partner_code: dto.partner_code,
            name: dto.name,
            partner_type: dto.partner_type,
            contact_person: dto.contact_person.unwrap_or_default(),
            phone: dto.phone.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            address: dto.address.unwrap_or_default(),
            remark: dto.remark.unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        require(&[("编号", &self.partner_code), ("名称", &self.name)])
    }

    fn to_dto(&self) -> PartnerDto {
        PartnerDto {
            partner_code: self.partner_code.trim().to_string(),
            name: self.name.trim().to_string(),
            partner_type: self.partner_type,
            contact_person: optional(&self.contact_person),
            phone: optional(&self.phone),
            email: optional(&self.email),
            address: optional(&self.address),
            remark: optional(&self.remark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_dto_sends_type_label_and_nulls() {
        let form = PartnerForm {
            partner_code: "C-01".into(),
            name: "华大".into(),
            partner_type: PartnerType::Customer,
            phone: "010-1234".into(),
            ..PartnerForm::default()
        };
        let value = serde_json::to_value(form.to_dto()).unwrap();
        assert_eq!(value["partner_type"], "客户");
        assert_eq!(value["phone"], "010-1234");
        assert!(value["email"].is_null());
    }

    #[test]
    fn name_is_required() {
        let form = PartnerForm {
            partner_code: "S-01".into(),
            ..PartnerForm::default()
        };
        assert_eq!(form.validate(), Err("请填写必填项: 名称".to_string()));
    }
}
