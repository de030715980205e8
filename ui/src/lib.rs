//! This crate contains the shared UI for account registration: the register
//! form, the loading spinner, the central store and the services behind it.

pub mod app;
pub use app::AppShell;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;

pub use components::display::LoadingSpinner;
pub use components::forms::RegisterForm;
