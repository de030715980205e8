// Client-side account registration

pub mod http_registrar;
pub mod registrar;

pub use http_registrar::{classify_response, HttpRegistrar};
pub use registrar::AccountRegistrar;
