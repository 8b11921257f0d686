pub mod api;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod dialogs;
pub mod forms;
pub mod icons;
pub mod modal;
pub mod number_format;
pub mod page_frame;
pub mod page_standard;
