use dioxus::prelude::*;

use super::validated_input::{InputType, ValidatedInput};

const EYE_ICON: Asset = asset!("/assets/img/eye.svg");
const CLOSED_EYE_ICON: Asset = asset!("/assets/img/closeEye.svg");

#[derive(Props, PartialEq, Clone)]
pub struct PasswordInputProps {
    pub value: String,
    pub placeholder: String,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Password field with an eye button that toggles masking
#[component]
pub fn PasswordInput(props: PasswordInputProps) -> Element {
    let mut masked = use_signal(|| true);

    let (input_type, icon) = if masked() {
        (InputType::Password, EYE_ICON)
    } else {
        (InputType::Text, CLOSED_EYE_ICON)
    };

    rsx! {
        div {
            class: "input-wrapper",
            ValidatedInput {
                value: props.value.clone(),
                placeholder: props.placeholder.clone(),
                input_type: input_type,
                disabled: props.disabled,
                on_change: props.on_change,
            }
            div {
                class: "password-mask",
                img {
                    class: "password-mask-icon",
                    src: icon,
                    alt: "Eye",
                    onclick: move |_| masked.toggle(),
                }
            }
        }
    }
}
