use std::str::FromStr;

use dioxus::prelude::*;
use ui::services::config::get_global_config;
use ui::{AppShell, RegisterForm};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppShell {
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            h1 { "Bienvenue" }
            Link { to: Route::Register {}, class: "home-link", "Créer un compte" }
        }
    }
}

#[component]
fn Register() -> Element {
    let nav = navigator();

    rsx! {
        RegisterForm {
            on_registered: move |_| {
                let home = Route::from_str(&get_global_config().ui.home_route)
                    .unwrap_or(Route::Home {});
                nav.push(home);
            }
        }
    }
}
