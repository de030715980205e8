pub mod loading_spinner;
pub mod toast_stack;

pub use loading_spinner::*;
pub use toast_stack::*;
