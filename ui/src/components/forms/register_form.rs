use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::display::LoadingSpinner;
use crate::components::input::{
    input_wrapper_class, ErrorMessage, FieldFeedback, InputType, PasswordInput, ValidatedInput,
};
use crate::console_debug;
use crate::features::registration::{
    should_reset_on_unmount, submit_form, use_app_store, AppAction, Field, FieldFlags, NewUser,
    SubmissionOutcome, SuccessLatch,
};

const REGISTER_FORM_CSS: Asset = asset!("/assets/styling/register_form.css");

#[derive(Props, PartialEq, Clone)]
pub struct RegisterFormProps {
    /// Called once after the account is created, after the notification is sent
    pub on_registered: EventHandler<()>,
}

#[component]
pub fn RegisterForm(props: RegisterFormProps) -> Element {
    let store = use_app_store();
    let mut user = use_signal(NewUser::default);
    let mut flags = use_signal(FieldFlags::default);

    let latch = use_hook(|| Rc::new(SuccessLatch::default()));

    let on_registered = props.on_registered;
    use_effect(move || {
        if latch.fire(store.state.read().success()) {
            store.dispatch.call(AppAction::NotificationSend);
            on_registered.call(());
        }
    });

    use_drop(move || {
        if should_reset_on_unmount(&store.state.peek().registration) {
            store.dispatch.call(AppAction::ResetRegistration);
        }
    });

    let submit = move |_: MouseEvent| {
        let outcome = submit_form(&mut user.write(), &mut flags.write());

        match outcome {
            SubmissionOutcome::Ready(new_user) => {
                store.dispatch.call(AppAction::Register(new_user));
            }
            SubmissionOutcome::MissingFields(fields) => {
                console_debug!("[RegisterForm] Missing fields: {:?}", fields);
            }
            other => {
                console_debug!("[RegisterForm] Submission blocked: {:?}", other);
            }
        }
    };

    let (loading, server) = {
        let state = store.state.read();
        (state.loading(), state.error().clone())
    };
    let current = user();

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTER_FORM_CSS }

        div {
            class: "register-container",

            h1 {
                class: "register-title",
                "Inscrit toi !"
            }

            div {
                class: input_wrapper_class(server.username),
                ValidatedInput {
                    value: current.username.clone(),
                    placeholder: "Pseudo".to_string(),
                    input_type: InputType::Text,
                    disabled: loading,
                    on_change: move |value: String| edit_field(user, flags, Field::Username, value),
                }
            }
            FieldFeedback { field: Field::Username, flags: flags(), server: server.clone() }

            div {
                class: input_wrapper_class(server.email),
                ValidatedInput {
                    value: current.email.clone(),
                    placeholder: "E-mail".to_string(),
                    input_type: InputType::Email,
                    disabled: loading,
                    on_change: move |value: String| edit_field(user, flags, Field::Email, value),
                }
            }
            FieldFeedback { field: Field::Email, flags: flags(), server: server.clone() }

            PasswordInput {
                value: current.password.clone(),
                placeholder: "Mot de passe".to_string(),
                disabled: loading,
                on_change: move |value: String| edit_field(user, flags, Field::Password, value),
            }
            FieldFeedback { field: Field::Password, flags: flags(), server: server.clone() }

            if let Some(message) = server.message.clone() {
                ErrorMessage { message: message }
            }

            if loading {
                LoadingSpinner {}
            } else {
                button {
                    class: "register-button",
                    r#type: "submit",
                    onclick: submit,
                    "Inscription"
                }
            }
        }
    }
}

fn edit_field(
    mut user: Signal<NewUser>,
    mut flags: Signal<FieldFlags>,
    field: Field,
    value: String,
) {
    flags.with_mut(|f| f.on_edit(field, &value));
    user.with_mut(|u| u.set_field(field, value));
}
