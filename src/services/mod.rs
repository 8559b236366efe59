pub mod customer_store;
pub mod error_handling;
pub mod list_controller;
pub mod profile_controller;
pub mod timer;

pub use customer_store::CustomerStore;
pub use list_controller::{FetchTicket, ListController, ListPhase};
pub use profile_controller::{ProfileController, ProfileState};
