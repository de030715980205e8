use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::console_debug;
use crate::features::registration::{use_app_store, AppAction, Notification};
use crate::services::config::get_global_config;

/// Renders the store's notifications in the corner of the page
#[component]
pub fn ToastStack() -> Element {
    let store = use_app_store();
    let notifications = store.state.read().notifications.clone();

    rsx! {
        div {
            class: "toast-stack",
            for notification in notifications {
                ToastItem {
                    key: "{notification.id}",
                    notification: notification.clone(),
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ToastItemProps {
    pub notification: Notification,
}

#[component]
pub fn ToastItem(props: ToastItemProps) -> Element {
    let store = use_app_store();
    let id = props.notification.id;

    // Auto-dismiss once, when the toast first mounts
    use_hook(move || {
        let duration = get_global_config().ui.toast_duration_ms;
        spawn(async move {
            TimeoutFuture::new(duration).await;
            console_debug!("[Toast] Auto-dismissing notification {}", id);
            store.dispatch.call(AppAction::NotificationDismiss(id));
        })
    });

    rsx! {
        div {
            class: "{props.notification.kind.css_class()}",
            onclick: move |_| store.dispatch.call(AppAction::NotificationDismiss(id)),
            "{props.notification.message}"
        }
    }
}
