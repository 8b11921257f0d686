pub mod stat_card;
pub mod status_badge;
pub mod table;
pub mod ui;
