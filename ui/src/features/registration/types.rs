use serde::{Deserialize, Serialize};

/// Account record sent to the backend when the form is submitted
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

// Form fields
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];
}

/// Inline error flags owned by the register form
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct FieldFlags {
    pub empty_username: bool,
    pub empty_email: bool,
    pub empty_password: bool,
    pub invalid_email: bool,
    pub invalid_password: bool,
}

impl FieldFlags {
    pub fn is_empty_flagged(&self, field: Field) -> bool {
        match field {
            Field::Username => self.empty_username,
            Field::Email => self.empty_email,
            Field::Password => self.empty_password,
        }
    }

    pub fn set_empty(&mut self, field: Field, empty: bool) {
        match field {
            Field::Username => self.empty_username = empty,
            Field::Email => self.empty_email = empty,
            Field::Password => self.empty_password = empty,
        }
    }

    pub fn any(&self) -> bool {
        self.empty_username
            || self.empty_email
            || self.empty_password
            || self.invalid_email
            || self.invalid_password
    }
}

/// Result of checking a submission locally, before anything is dispatched
#[derive(Clone, PartialEq, Debug)]
pub enum SubmissionOutcome {
    /// All checks passed; carries the user to register
    Ready(NewUser),
    /// At least one field is empty; lists which ones
    MissingFields(Vec<Field>),
    InvalidEmail,
    InvalidPassword,
}

/// Field errors computed by the backend ("already taken") plus a generic failure message
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerFieldErrors {
    #[serde(default)]
    pub username: bool,
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ServerFieldErrors {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn has_any(&self) -> bool {
        self.username || self.email || self.message.is_some()
    }
}

/// Registration flags consumed by the form: loading / error / success
#[derive(Clone, Default, PartialEq, Debug)]
pub struct RegistrationStatus {
    pub loading: bool,
    pub error: ServerFieldErrors,
    pub success: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Success,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast-success",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum AppAction {
    Register(NewUser),
    RegisterSucceeded,
    RegisterFailed(ServerFieldErrors),
    NotificationSend,
    NotificationDismiss(u64),
    ResetRegistration,
}

/// Centralized application state
#[derive(Clone, Default, Debug)]
pub struct AppState {
    pub registration: RegistrationStatus,
    pub notifications: Vec<Notification>,
    pub(crate) next_notification_id: u64,
}

impl AppState {
    pub fn loading(&self) -> bool {
        self.registration.loading
    }

    pub fn success(&self) -> bool {
        self.registration.success
    }

    pub fn error(&self) -> &ServerFieldErrors {
        &self.registration.error
    }
}
