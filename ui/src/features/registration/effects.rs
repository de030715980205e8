use crate::services::client::AccountRegistrar;
use crate::{console_info, console_warn};

use super::types::{AppAction, NewUser};

/// Side effect of `AppAction::Register`: call the registrar and report the outcome
pub async fn run_registration<R, D>(registrar: &R, user: NewUser, dispatch: D)
where
    R: AccountRegistrar + ?Sized,
    D: Fn(AppAction),
{
    console_info!("[Registration] Submitting account for {}", user.username);

    match registrar.register(&user).await {
        Ok(()) => {
            console_info!("[Registration] Account created for {}", user.username);
            dispatch(AppAction::RegisterSucceeded);
        }
        Err(e) => {
            console_warn!("[Registration] Failed: {}", e);
            dispatch(AppAction::RegisterFailed(e.into_field_errors()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::registration::ServerFieldErrors;
    use crate::services::errors::{RegistrationError, RegistrationResult};
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct TakenUsernames(Vec<&'static str>);

    #[async_trait(?Send)]
    impl AccountRegistrar for TakenUsernames {
        async fn register(&self, user: &NewUser) -> RegistrationResult<()> {
            if self.0.iter().any(|name| *name == user.username) {
                Err(RegistrationError::Rejected(ServerFieldErrors {
                    username: true,
                    ..ServerFieldErrors::default()
                }))
            } else {
                Ok(())
            }
        }
    }

    struct Offline;

    #[async_trait(?Send)]
    impl AccountRegistrar for Offline {
        async fn register(&self, _user: &NewUser) -> RegistrationResult<()> {
            Err(RegistrationError::Network {
                message: "connection refused".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_success_dispatches_register_succeeded() {
        let actions = RefCell::new(Vec::new());
        let registrar = TakenUsernames(vec!["admin"]);

        run_registration(
            &registrar,
            NewUser::new("jane", "jane@example.com", "Secr3t!"),
            |a| actions.borrow_mut().push(a),
        )
        .await;

        assert_eq!(actions.into_inner(), vec![AppAction::RegisterSucceeded]);
    }

    #[tokio::test]
    async fn test_rejection_dispatches_field_errors() {
        let actions = RefCell::new(Vec::new());
        let registrar = TakenUsernames(vec!["admin"]);

        run_registration(
            &registrar,
            NewUser::new("admin", "admin@example.com", "Secr3t!"),
            |a| actions.borrow_mut().push(a),
        )
        .await;

        let actions = actions.into_inner();
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            AppAction::RegisterFailed(errors) => {
                assert!(errors.username);
                assert!(!errors.email);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_network_failure_dispatches_message() {
        let actions = RefCell::new(Vec::new());
        let registrar: Box<dyn AccountRegistrar> = Box::new(Offline);

        run_registration(
            registrar.as_ref(),
            NewUser::new("jane", "jane@example.com", "Secr3t!"),
            |a| actions.borrow_mut().push(a),
        )
        .await;

        match actions.into_inner().as_slice() {
            [AppAction::RegisterFailed(errors)] => assert!(errors.message.is_some()),
            other => panic!("unexpected actions: {other:?}"),
        }
    }
}
