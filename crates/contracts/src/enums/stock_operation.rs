use serde::{Deserialize, Serialize};

/// Тип складской операции
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockOperation {
    #[serde(rename = "入库")]
    In,
    #[serde(rename = "出库")]
    Out,
    #[serde(rename = "调整")]
    Adjust,
    #[serde(rename = "退货")]
    Return,
}

impl StockOperation {
    pub fn label(&self) -> &'static str {
        match self {
            StockOperation::In => "入库",
            StockOperation::Out => "出库",
            StockOperation::Adjust => "调整",
            StockOperation::Return => "退货",
        }
    }
}

/// Операции, для которых у inventory API есть собственный endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockDirection {
    In,
    Out,
}

impl StockDirection {
    pub fn operation(&self) -> StockOperation {
        match self {
            StockDirection::In => StockOperation::In,
            StockDirection::Out => StockOperation::Out,
        }
    }

    pub fn label(&self) -> &'static str {
        self.operation().label()
    }

    /// Segment after `/inventory/`
    pub fn endpoint(&self) -> &'static str {
        match self {
            StockDirection::In => "in",
            StockDirection::Out => "out",
        }
    }
}
