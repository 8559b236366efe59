pub mod customer;
pub mod dialog;
pub mod navigation;
pub mod page_view;
pub mod status_message;
