use thiserror::Error;

use crate::features::registration::ServerFieldErrors;

#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The backend refused the account, naming the fields that are already taken
    #[error("Registration rejected: {0:?}")]
    Rejected(ServerFieldErrors),

    #[error("Unexpected response status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {message}")]
    Network { message: String },
}

impl From<reqwest::Error> for RegistrationError {
    fn from(error: reqwest::Error) -> Self {
        RegistrationError::Network {
            message: error.to_string(),
        }
    }
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    /// Flatten into the error flags the register form renders
    pub fn into_field_errors(self) -> ServerFieldErrors {
        match self {
            RegistrationError::Rejected(errors) => errors,
            RegistrationError::Status { status, .. } => ServerFieldErrors::with_message(format!(
                "Le serveur a répondu avec une erreur ({status})"
            )),
            RegistrationError::Network { .. } => {
                ServerFieldErrors::with_message("Impossible de joindre le serveur")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_keeps_field_flags() {
        let errors = ServerFieldErrors {
            username: true,
            email: false,
            message: None,
        };
        let mapped = RegistrationError::Rejected(errors.clone()).into_field_errors();
        assert_eq!(mapped, errors);
    }

    #[test]
    fn test_non_field_failures_carry_a_message() {
        let mapped = RegistrationError::Status {
            status: 503,
            body: "down".to_string(),
        }
        .into_field_errors();
        assert!(!mapped.username && !mapped.email);
        assert!(mapped.message.unwrap().contains("503"));

        let mapped = RegistrationError::Network {
            message: "offline".to_string(),
        }
        .into_field_errors();
        assert!(mapped.message.is_some());
    }
}
