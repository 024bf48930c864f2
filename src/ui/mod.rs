pub mod info_panel;
pub mod layout;
pub mod theme;
