//! Статусы заказов на закупку и продажу.
//!
//! Backend хранит статус строкой; UI сопоставляет её с CSS-классом бейджа.
//! Неизвестные значения отображаются как есть с классом `draft`.

use serde::{Deserialize, Serialize};

/// CSS class used for statuses the console does not know about
pub const FALLBACK_STATUS_CLASS: &str = "draft";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    #[serde(rename = "草稿")]
    Draft,
    #[serde(rename = "待审核")]
    Pending,
    #[serde(rename = "已审核")]
    Approved,
    #[serde(rename = "已下单")]
    Ordered,
    #[serde(rename = "部分入库")]
    PartialReceived,
    #[serde(rename = "已完成")]
    Completed,
    #[serde(rename = "已取消")]
    Cancelled,
}

impl PurchaseOrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "草稿",
            PurchaseOrderStatus::Pending => "待审核",
            PurchaseOrderStatus::Approved => "已审核",
            PurchaseOrderStatus::Ordered => "已下单",
            PurchaseOrderStatus::PartialReceived => "部分入库",
            PurchaseOrderStatus::Completed => "已完成",
            PurchaseOrderStatus::Cancelled => "已取消",
        }
    }

    pub fn all() -> Vec<PurchaseOrderStatus> {
        vec![
            PurchaseOrderStatus::Draft,
            PurchaseOrderStatus::Pending,
            PurchaseOrderStatus::Approved,
            PurchaseOrderStatus::Ordered,
            PurchaseOrderStatus::PartialReceived,
            PurchaseOrderStatus::Completed,
            PurchaseOrderStatus::Cancelled,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.label() == label)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Pending => "pending",
            PurchaseOrderStatus::Approved => "approved",
            PurchaseOrderStatus::Completed => "completed",
            PurchaseOrderStatus::Cancelled => "cancelled",
            _ => FALLBACK_STATUS_CLASS,
        }
    }

    /// Только заказ в статусе "待审核" можно утвердить
    pub fn can_approve(&self) -> bool {
        matches!(self, PurchaseOrderStatus::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalesOrderStatus {
    #[serde(rename = "草稿")]
    Draft,
    #[serde(rename = "待审核")]
    Pending,
    #[serde(rename = "已审核")]
    Approved,
    #[serde(rename = "处理中")]
    Processing,
    #[serde(rename = "部分出库")]
    PartialShipped,
    #[serde(rename = "已出库")]
    Shipped,
    #[serde(rename = "已完成")]
    Completed,
    #[serde(rename = "已取消")]
    Cancelled,
}

impl SalesOrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SalesOrderStatus::Draft => "草稿",
            SalesOrderStatus::Pending => "待审核",
            SalesOrderStatus::Approved => "已审核",
            SalesOrderStatus::Processing => "处理中",
            SalesOrderStatus::PartialShipped => "部分出库",
            SalesOrderStatus::Shipped => "已出库",
            SalesOrderStatus::Completed => "已完成",
            SalesOrderStatus::Cancelled => "已取消",
        }
    }

    pub fn all() -> Vec<SalesOrderStatus> {
        vec![
            SalesOrderStatus::Draft,
            SalesOrderStatus::Pending,
            SalesOrderStatus::Approved,
            SalesOrderStatus::Processing,
            SalesOrderStatus::PartialShipped,
            SalesOrderStatus::Shipped,
            SalesOrderStatus::Completed,
            SalesOrderStatus::Cancelled,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.label() == label)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SalesOrderStatus::Pending => "pending",
            SalesOrderStatus::Approved => "approved",
            SalesOrderStatus::Completed => "completed",
            SalesOrderStatus::Cancelled => "cancelled",
            _ => FALLBACK_STATUS_CLASS,
        }
    }

    pub fn can_approve(&self) -> bool {
        matches!(self, SalesOrderStatus::Pending)
    }
}
