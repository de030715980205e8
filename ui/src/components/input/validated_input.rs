use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "input-field",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

/// Border wrapper around an input; turns red when the backend refused the value
pub fn input_wrapper_class(has_error: bool) -> &'static str {
    if has_error {
        "input-wrapper input-wrapper-error"
    } else {
        "input-wrapper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_attribute() {
        assert_eq!(InputType::Text.as_str(), "text");
        assert_eq!(InputType::Password.as_str(), "password");
        assert_eq!(InputType::Email.as_str(), "email");
    }

    #[test]
    fn test_wrapper_class_marks_refused_values() {
        assert_eq!(input_wrapper_class(false), "input-wrapper");
        assert_eq!(input_wrapper_class(true), "input-wrapper input-wrapper-error");
    }
}
