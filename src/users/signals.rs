//! Users Signals
//!
//! Receivers for user events, installed by the users app's ready hook.

use crate::application::lifecycle::{Extension, ExtensionContext};
use crate::domain::signals::UserUpdated;

const PROFILE_UPDATED_UID: &str = "users.log_profile_updated";

/// Connects the users receivers to the signal hub
#[derive(Debug, Default, Clone, Copy)]
pub struct UsersSignals;

impl Extension for UsersSignals {
    fn install(&self, ctx: &ExtensionContext<'_>) -> anyhow::Result<()> {
        ctx.signals
            .user_updated
            .connect(PROFILE_UPDATED_UID, log_profile_updated);
        Ok(())
    }
}

fn log_profile_updated(event: &UserUpdated) {
    if event.previous_username == event.user.username() {
        tracing::info!(user_id = %event.user.id(), username = event.user.username(), "User profile updated");
    } else {
        tracing::info!(
            user_id = %event.user.id(),
            previous_username = %event.previous_username,
            username = event.user.username(),
            "User renamed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::{CreateUserData, User};
    use crate::domain::signals::Signals;

    #[test]
    fn test_install_connects_receiver_once() {
        let signals = Signals::new();
        let ctx = ExtensionContext { signals: &signals };

        UsersSignals.install(&ctx).unwrap();
        UsersSignals.install(&ctx).unwrap();

        assert_eq!(signals.user_updated.receiver_count(), 1);

        let event = UserUpdated {
            user: User::new(CreateUserData {
                username: "alice".to_string(),
                name: "Alice".to_string(),
            }),
            previous_username: "alice".to_string(),
        };
        assert_eq!(signals.user_updated.send(&event), 1);
    }
}
