pub mod actions;
pub mod form;
pub mod list;
