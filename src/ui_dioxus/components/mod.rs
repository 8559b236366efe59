pub mod customer_modal;
pub mod customer_row;
pub mod loader;

pub use customer_modal::CustomerModal;
pub use customer_row::CustomerRowView;
pub use loader::Loader;
