//! Extension Registry
//!
//! Optional side-effect modules addressed by a conventional dotted name
//! (for example `demo_app.users.signals`). Asking for a name that nothing
//! registered is a normal outcome, not an error.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::domain::signals::Signals;
use crate::shared::errors::ExtensionError;

/// What an extension may touch while installing
pub struct ExtensionContext<'a> {
    pub signals: &'a Signals,
}

/// A named module of startup side effects
pub trait Extension: Send + Sync {
    /// Apply the extension's side effects
    ///
    /// # Errors
    ///
    /// Any error aborts the load and is reported as `ExtensionError::Failed`.
    fn install(&self, ctx: &ExtensionContext<'_>) -> anyhow::Result<()>;
}

/// Result of asking the registry for an extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing is registered under the requested name
    NotFound,
    /// The extension ran for the first time
    Installed,
    /// The extension had already been installed; nothing ran
    AlreadyInstalled,
}

/// Registry of optional extensions keyed by name
#[derive(Default)]
pub struct ExtensionRegistry {
    available: HashMap<String, Arc<dyn Extension>>,
    installed: HashSet<String>,
}

impl ExtensionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an extension available under `name`, replacing any previous one
    pub fn register(&mut self, name: impl Into<String>, extension: impl Extension + 'static) -> &mut Self {
        let name = name.into();
        tracing::debug!(extension = %name, "Extension registered");
        self.available.insert(name, Arc::new(extension));
        self
    }

    #[must_use]
    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.contains(name)
    }

    /// Load the extension registered under `name`
    ///
    /// Side effects run at most once per registry. A failed install is not
    /// recorded, so a later load runs the extension again.
    ///
    /// # Errors
    ///
    /// Returns `ExtensionError::Failed` if the extension exists but its install fails.
    pub fn load(&mut self, name: &str, ctx: &ExtensionContext<'_>) -> Result<LoadOutcome, ExtensionError> {
        let Some(extension) = self.available.get(name) else {
            tracing::debug!(extension = name, "No extension registered under this name");
            return Ok(LoadOutcome::NotFound);
        };

        if self.installed.contains(name) {
            return Ok(LoadOutcome::AlreadyInstalled);
        }

        extension.install(ctx).map_err(|source| {
            tracing::error!(extension = name, error = %source, "Extension failed to load");
            ExtensionError::Failed {
                name: name.to_string(),
                source,
            }
        })?;

        self.installed.insert(name.to_string());
        tracing::info!(extension = name, "Extension loaded");
        Ok(LoadOutcome::Installed)
    }
}

impl fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut available: Vec<&String> = self.available.keys().collect();
        available.sort();
        f.debug_struct("ExtensionRegistry")
            .field("available", &available)
            .field("installed", &self.installed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting(Arc<AtomicUsize>);

    impl Extension for Counting {
        fn install(&self, _ctx: &ExtensionContext<'_>) -> anyhow::Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailsUntil {
        attempts: AtomicUsize,
        succeed_on: usize,
    }

    impl Extension for FailsUntil {
        fn install(&self, _ctx: &ExtensionContext<'_>) -> anyhow::Result<()> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
            if attempt < self.succeed_on {
                anyhow::bail!("attempt {attempt} failed");
            }
            Ok(())
        }
    }

    #[test]
    fn test_absent_extension_is_not_found() {
        let signals = Signals::new();
        let mut registry = ExtensionRegistry::new();

        let outcome = registry.load("missing.signals", &ExtensionContext { signals: &signals });

        assert_eq!(outcome.unwrap(), LoadOutcome::NotFound);
        assert!(!registry.is_installed("missing.signals"));
    }

    #[test]
    fn test_extension_installs_once() {
        let signals = Signals::new();
        let ctx = ExtensionContext { signals: &signals };
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = ExtensionRegistry::new();
        registry.register("app.signals", Counting(calls.clone()));

        assert_eq!(registry.load("app.signals", &ctx).unwrap(), LoadOutcome::Installed);
        assert_eq!(registry.load("app.signals", &ctx).unwrap(), LoadOutcome::AlreadyInstalled);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(registry.is_installed("app.signals"));
    }

    #[test]
    fn test_failed_install_is_reported_and_retried() {
        let signals = Signals::new();
        let ctx = ExtensionContext { signals: &signals };
        let mut registry = ExtensionRegistry::new();
        registry.register(
            "app.signals",
            FailsUntil {
                attempts: AtomicUsize::new(0),
                succeed_on: 2,
            },
        );

        let err = registry.load("app.signals", &ctx).unwrap_err();
        let ExtensionError::Failed { name, source } = err;
        assert_eq!(name, "app.signals");
        assert_eq!(source.to_string(), "attempt 1 failed");
        assert!(!registry.is_installed("app.signals"));

        assert_eq!(registry.load("app.signals", &ctx).unwrap(), LoadOutcome::Installed);
    }
}
