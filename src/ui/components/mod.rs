pub mod auth_modal;
pub mod background;
pub mod chart;
pub mod sidebar;
pub mod stat_card;
pub mod top_bar;
