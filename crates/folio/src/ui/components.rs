pub mod footer_bar;
pub mod listing;
pub mod sidebar;
pub mod status_bar;
