use serde::{Deserialize, Serialize};

/// Типы продукции (значения совпадают с backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "蛋白")]
    Protein,
    #[serde(rename = "抗原")]
    Antigen,
    #[serde(rename = "抗体")]
    Antibody,
    #[serde(rename = "合成服务")]
    SynthesisService,
    #[serde(rename = "试剂")]
    Reagent,
    #[serde(rename = "其他")]
    Other,
}

impl ProductType {
    /// Значение, которое хранит и принимает backend
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Protein => "蛋白",
            ProductType::Antigen => "抗原",
            ProductType::Antibody => "抗体",
            ProductType::SynthesisService => "合成服务",
            ProductType::Reagent => "试剂",
            ProductType::Other => "其他",
        }
    }

    /// Все типы в порядке отображения в форме
    pub fn all() -> Vec<ProductType> {
        vec![
            ProductType::Protein,
            ProductType::Antigen,
            ProductType::Antibody,
            ProductType::SynthesisService,
            ProductType::Reagent,
            ProductType::Other,
        ]
    }

    /// Парсинг из строки
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.label() == label)
    }
}
