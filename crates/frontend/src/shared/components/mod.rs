pub mod pagination_controls;
pub mod toast;
pub mod ui;
