use std::rc::Rc;

use dioxus::prelude::*;

use crate::services::client::{AccountRegistrar, HttpRegistrar};
use crate::services::config::get_global_config;

use super::effects::run_registration;
use super::types::{AppAction, AppState};

/// Handle to the central store shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct Store {
    pub state: Signal<AppState>,
    pub dispatch: EventHandler<AppAction>,
}

/// Install the store backed by the HTTP registrar from the global config
pub fn provide_app_store() -> Store {
    provide_app_store_with(|| -> Rc<dyn AccountRegistrar> {
        Rc::new(HttpRegistrar::new(&get_global_config().api))
    })
}

/// Install the store with a custom registrar
pub fn provide_app_store_with(
    make_registrar: impl FnOnce() -> Rc<dyn AccountRegistrar>,
) -> Store {
    let state = use_signal(AppState::default);

    use_context_provider(move || {
        let registrar = make_registrar();

        // In-place reduction keeps Signal reactivity
        let dispatch = EventHandler::new(move |action: AppAction| {
            let register = match &action {
                AppAction::Register(user) => Some(user.clone()),
                _ => None,
            };

            reduce(state, action);

            if let Some(user) = register {
                let registrar = registrar.clone();
                spawn(async move {
                    run_registration(registrar.as_ref(), user, move |a| reduce(state, a)).await;
                });
            }
        });

        Store { state, dispatch }
    })
}

/// Fetch the store installed by an ancestor
pub fn use_app_store() -> Store {
    use_context::<Store>()
}

fn reduce(mut state: Signal<AppState>, action: AppAction) {
    state.with_mut(|s| s.reduce_in_place(action));
}
