use super::types::*;

/// Toast shown once an account has been created
pub const ACCOUNT_CREATED_MESSAGE: &str = "Ton compte a été créé";

impl AppState {
    /// Apply an action by mutating the state in place so the owning Signal keeps its reactivity
    pub fn reduce_in_place(&mut self, action: AppAction) {
        match action {
            AppAction::Register(_) => {
                self.registration.loading = true;
                self.registration.success = false;
                self.registration.error = ServerFieldErrors::default();
            }
            AppAction::RegisterSucceeded => {
                self.registration.loading = false;
                self.registration.success = true;
            }
            AppAction::RegisterFailed(error) => {
                self.registration.loading = false;
                self.registration.success = false;
                self.registration.error = error;
            }
            AppAction::NotificationSend => {
                self.push_notification(NotificationKind::Success, ACCOUNT_CREATED_MESSAGE);
            }
            AppAction::NotificationDismiss(id) => {
                self.notifications.retain(|n| n.id != id);
            }
            AppAction::ResetRegistration => {
                self.registration = RegistrationStatus::default();
            }
        }
    }

    fn push_notification(&mut self, kind: NotificationKind, message: &str) -> u64 {
        self.next_notification_id += 1;
        let id = self.next_notification_id;
        self.notifications.push(Notification {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> NewUser {
        NewUser::new("jane", "jane@example.com", "Secr3t!")
    }

    #[test]
    fn test_register_sets_loading_and_clears_previous_error() {
        let mut state = AppState::default();
        state.registration.error = ServerFieldErrors {
            username: true,
            ..ServerFieldErrors::default()
        };

        state.reduce_in_place(AppAction::Register(user()));

        assert!(state.loading());
        assert!(!state.success());
        assert!(!state.error().has_any());
    }

    #[test]
    fn test_register_outcomes() {
        let mut state = AppState::default();
        state.reduce_in_place(AppAction::Register(user()));
        state.reduce_in_place(AppAction::RegisterSucceeded);
        assert!(!state.loading());
        assert!(state.success());

        let mut state = AppState::default();
        state.reduce_in_place(AppAction::Register(user()));
        state.reduce_in_place(AppAction::RegisterFailed(ServerFieldErrors {
            email: true,
            ..ServerFieldErrors::default()
        }));
        assert!(!state.loading());
        assert!(!state.success());
        assert!(state.error().email);
        assert!(!state.error().username);
    }

    #[test]
    fn test_notifications_get_unique_ids_and_dismiss() {
        let mut state = AppState::default();
        state.reduce_in_place(AppAction::NotificationSend);
        state.reduce_in_place(AppAction::NotificationSend);

        assert_eq!(state.notifications.len(), 2);
        let first = state.notifications[0].id;
        let second = state.notifications[1].id;
        assert_ne!(first, second);
        assert_eq!(state.notifications[0].message, ACCOUNT_CREATED_MESSAGE);
        assert_eq!(state.notifications[0].kind, NotificationKind::Success);

        state.reduce_in_place(AppAction::NotificationDismiss(first));
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].id, second);

        // unknown id is a no-op
        state.reduce_in_place(AppAction::NotificationDismiss(999));
        assert_eq!(state.notifications.len(), 1);

        // ids are never reused after a dismissal
        state.reduce_in_place(AppAction::NotificationSend);
        assert!(state.notifications.iter().all(|n| n.id != first));
    }

    #[test]
    fn test_reset_registration_keeps_notifications() {
        let mut state = AppState::default();
        state.reduce_in_place(AppAction::RegisterSucceeded);
        state.reduce_in_place(AppAction::NotificationSend);

        state.reduce_in_place(AppAction::ResetRegistration);

        assert_eq!(state.registration, RegistrationStatus::default());
        assert_eq!(state.notifications.len(), 1);
    }
}
