pub mod password_input;
pub mod validated_input;
pub mod validation_feedback;

pub use password_input::*;
pub use validated_input::*;
pub use validation_feedback::*;
