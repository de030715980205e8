use std::cell::Cell;

use super::types::{FieldFlags, NewUser, RegistrationStatus, SubmissionOutcome};
use super::validation::validate_submission;

/// Fires once per form mount, the first time the store reports success
#[derive(Debug, Default)]
pub struct SuccessLatch {
    fired: Cell<bool>,
}

impl SuccessLatch {
    /// True exactly once: on the first call that sees `success`
    pub fn fire(&self, success: bool) -> bool {
        if success && !self.fired.get() {
            self.fired.set(true);
            true
        } else {
            false
        }
    }
}

/// Validate the form, update its flags, and clear the inputs when the
/// submission is ready to be dispatched
pub fn submit_form(user: &mut NewUser, flags: &mut FieldFlags) -> SubmissionOutcome {
    let outcome = validate_submission(user);
    flags.apply_submission(&outcome);

    if let SubmissionOutcome::Ready(_) = outcome {
        *user = NewUser::default();
    }
    outcome
}

/// Leaving the page resets the registration status unless a request is in flight
pub fn should_reset_on_unmount(status: &RegistrationStatus) -> bool {
    !status.loading
}
