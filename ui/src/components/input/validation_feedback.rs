use dioxus::prelude::*;

use crate::features::registration::{Field, FieldFlags, ServerFieldErrors};

pub const USERNAME_TAKEN: &str = "Ce pseudo est déjà pris";
pub const EMAIL_TAKEN: &str = "Cette E-mail est déjà pris";
pub const FIELD_REQUIRED: &str = "Ce Champ est obligatoire";
pub const EMAIL_FORMAT: &str = "Le format de l'E-mail est incorrect";
pub const PASSWORD_FORMAT: &str = "Le mot de passe doit contenir au minimum 6 caractères, une majuscule, une minuscule, un caractère spécial et un chiffre";

/// Inline messages shown under a field, in display order
pub fn field_messages(
    field: Field,
    flags: &FieldFlags,
    server: &ServerFieldErrors,
) -> Vec<&'static str> {
    let mut messages = Vec::new();

    match field {
        Field::Username if server.username => messages.push(USERNAME_TAKEN),
        Field::Email if server.email => messages.push(EMAIL_TAKEN),
        _ => {}
    }

    if flags.is_empty_flagged(field) {
        messages.push(FIELD_REQUIRED);
    }

    match field {
        Field::Email if flags.invalid_email => messages.push(EMAIL_FORMAT),
        Field::Password if flags.invalid_password => messages.push(PASSWORD_FORMAT),
        _ => {}
    }

    messages
}

#[derive(Props, PartialEq, Clone)]
pub struct ErrorMessageProps {
    pub message: String,
}

#[component]
pub fn ErrorMessage(props: ErrorMessageProps) -> Element {
    rsx! {
        p {
            class: "error-message",
            "{props.message}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldFeedbackProps {
    pub field: Field,
    pub flags: FieldFlags,
    pub server: ServerFieldErrors,
}

#[component]
pub fn FieldFeedback(props: FieldFeedbackProps) -> Element {
    rsx! {
        for message in field_messages(props.field, &props.flags, &props.server) {
            ErrorMessage { key: "{message}", message: message.to_string() }
        }
    }
}
