pub mod a001_product;
pub mod a002_inventory;
pub mod a003_purchase_order;
pub mod a004_sales_order;
pub mod a005_partner;
pub mod common;
