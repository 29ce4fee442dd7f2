pub mod chat_area;
pub mod form;
pub mod nav_bar;
