pub mod view;

pub use view::SalesOrderDetails;
