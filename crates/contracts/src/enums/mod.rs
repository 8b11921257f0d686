pub mod order_status;
pub mod partner_type;
pub mod product_type;
pub mod stock_operation;

pub use order_status::{PurchaseOrderStatus, SalesOrderStatus};
pub use partner_type::PartnerType;
pub use product_type::ProductType;
pub use stock_operation::{StockDirection, StockOperation};
