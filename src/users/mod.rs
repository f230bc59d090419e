//! Users Application
//!
//! The installed application unit for user accounts.

pub mod signals;

use crate::application::lifecycle::{AppUnit, LoadOutcome, ReadyContext};
use crate::shared::errors::StartupError;

/// Identity of the users application unit
pub const APP_NAME: &str = "demo_app.users";

/// Conventional name of the users signals extension
pub const SIGNALS_EXTENSION: &str = "demo_app.users.signals";

/// Application unit for user accounts
#[derive(Debug, Default)]
pub struct UsersApp;

impl UsersApp {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AppUnit for UsersApp {
    fn name(&self) -> &str {
        APP_NAME
    }

    fn verbose_name(&self) -> String {
        "Users".to_string()
    }

    fn ready(&self, ctx: &mut ReadyContext<'_>) -> Result<(), StartupError> {
        let outcome = ctx
            .load_extension(SIGNALS_EXTENSION)
            .map_err(|source| StartupError::Extension {
                app: APP_NAME.to_string(),
                source,
            })?;

        if outcome == LoadOutcome::NotFound {
            tracing::debug!(extension = SIGNALS_EXTENSION, "No signals extension, continuing");
        }
        Ok(())
    }
}
