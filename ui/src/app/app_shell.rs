use dioxus::prelude::*;

use crate::components::display::ToastStack;
use crate::console_info;
use crate::features::registration::provide_app_store;
use crate::services::config::get_global_config;

const APP_SHELL_CSS: Asset = asset!("/assets/styling/app_shell.css");

#[derive(Props, PartialEq, Clone)]
pub struct AppShellProps {
    pub children: Element,
}

/// Root of the application: owns the central store and the toast stack so
/// both survive navigation between pages
#[component]
pub fn AppShell(props: AppShellProps) -> Element {
    provide_app_store();

    use_hook(|| {
        let config = get_global_config();
        console_info!(
            "[App] Registration endpoint: {}",
            config.api.register_url()
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: APP_SHELL_CSS }

        div {
            class: "app-shell",
            {props.children}
            ToastStack {}
        }
    }
}
