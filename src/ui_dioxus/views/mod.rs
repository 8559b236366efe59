pub mod customer_view;
pub mod profile_view;

pub use customer_view::CustomerView;
pub use profile_view::ProfileView;
