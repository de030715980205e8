//! Account registration
//!
//! Local validation for the register form, the central store it dispatches
//! into, and the side effect that talks to the registrar.

pub mod controller;
pub mod effects;
pub mod state;
pub mod store;
pub mod types;
pub mod validation;

pub use controller::{should_reset_on_unmount, submit_form, SuccessLatch};
pub use effects::run_registration;
pub use state::ACCOUNT_CREATED_MESSAGE;
pub use store::{provide_app_store, provide_app_store_with, use_app_store, Store};
pub use types::*;
pub use validation::*;
