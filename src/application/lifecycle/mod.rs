//! Application Lifecycle
//!
//! Installed application units and the registry that brings them up. Each unit
//! gets a single `ready` callback once every unit has been registered, before
//! the server starts accepting requests.

pub mod extensions;

use std::collections::HashSet;

use crate::domain::signals::Signals;
use crate::shared::errors::{ExtensionError, StartupError};

pub use extensions::{Extension, ExtensionContext, ExtensionRegistry, LoadOutcome};

/// Startup resources handed to `AppUnit::ready`
pub struct ReadyContext<'a> {
    pub extensions: &'a mut ExtensionRegistry,
    pub signals: &'a Signals,
}

impl ReadyContext<'_> {
    /// Load an extension by name with this context's signals
    ///
    /// # Errors
    ///
    /// Returns `ExtensionError::Failed` if the extension exists but fails to install.
    pub fn load_extension(&mut self, name: &str) -> Result<LoadOutcome, ExtensionError> {
        self.extensions.load(name, &ExtensionContext { signals: self.signals })
    }
}

/// A named application unit
pub trait AppUnit: Send + Sync {
    /// Full dotted identity, e.g. `demo_app.users`
    fn name(&self) -> &str;

    /// Short label, the last segment of `name`
    fn label(&self) -> &str {
        self.name().rsplit('.').next().unwrap_or_else(|| self.name())
    }

    /// Human-readable name
    fn verbose_name(&self) -> String {
        let label = self.label().replace('_', " ");
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Called once after all units are registered
    ///
    /// # Errors
    ///
    /// Any error aborts startup.
    fn ready(&self, _ctx: &mut ReadyContext<'_>) -> Result<(), StartupError> {
        Ok(())
    }
}

/// Registry of installed application units
#[derive(Default)]
pub struct AppRegistry {
    apps: Vec<Box<dyn AppUnit>>,
    ready: bool,
}

impl AppRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `apps` and run each unit's `ready` hook once, in order
    ///
    /// Populating an already ready registry does nothing.
    ///
    /// # Errors
    ///
    /// Returns `StartupError::DuplicateLabel` if two units share a label, or the
    /// first error returned by a `ready` hook. The registry is left not ready.
    pub fn populate(
        &mut self,
        apps: Vec<Box<dyn AppUnit>>,
        extensions: &mut ExtensionRegistry,
        signals: &Signals,
    ) -> Result<(), StartupError> {
        if self.ready {
            tracing::debug!("App registry already populated");
            return Ok(());
        }

        let mut seen = HashSet::new();
        for app in &apps {
            if !seen.insert(app.label().to_string()) {
                return Err(StartupError::DuplicateLabel(app.label().to_string()));
            }
        }

        self.apps = apps;

        let mut ctx = ReadyContext { extensions, signals };
        for app in &self.apps {
            tracing::debug!(app = app.name(), "Running ready hook");
            app.ready(&mut ctx)?;
            tracing::info!(app = app.name(), verbose_name = %app.verbose_name(), "App ready");
        }

        self.ready = true;
        Ok(())
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Look up an installed unit by label
    #[must_use]
    pub fn get_app(&self, label: &str) -> Option<&dyn AppUnit> {
        self.apps.iter().find(|app| app.label() == label).map(Box::as_ref)
    }

    pub fn apps(&self) -> impl Iterator<Item = &dyn AppUnit> {
        self.apps.iter().map(Box::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Plain(&'static str);

    impl AppUnit for Plain {
        fn name(&self) -> &str {
            self.0
        }
    }

    struct Counting {
        name: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl AppUnit for Counting {
        fn name(&self) -> &str {
            self.name
        }

        fn ready(&self, _ctx: &mut ReadyContext<'_>) -> Result<(), StartupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Broken;

    impl AppUnit for Broken {
        fn name(&self) -> &str {
            "demo_app.broken"
        }

        fn ready(&self, _ctx: &mut ReadyContext<'_>) -> Result<(), StartupError> {
            Err(StartupError::Extension {
                app: self.name().to_string(),
                source: ExtensionError::Failed {
                    name: "demo_app.broken.signals".to_string(),
                    source: anyhow::anyhow!("boom"),
                },
            })
        }
    }

    #[test]
    fn test_label_and_default_verbose_name() {
        let app = Plain("demo_app.audit_log");
        assert_eq!(app.label(), "audit_log");
        assert_eq!(app.verbose_name(), "Audit log");

        let flat = Plain("standalone");
        assert_eq!(flat.label(), "standalone");
    }

    #[test]
    fn test_populate_runs_ready_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let signals = Signals::new();
        let mut extensions = ExtensionRegistry::new();
        let mut registry = AppRegistry::new();

        registry
            .populate(
                vec![Box::new(Counting {
                    name: "demo_app.counting",
                    calls: calls.clone(),
                })],
                &mut extensions,
                &signals,
            )
            .unwrap();
        registry.populate(vec![], &mut extensions, &signals).unwrap();

        assert!(registry.is_ready());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(registry.get_app("counting").map(|app| app.name()), Some("demo_app.counting"));
        assert_eq!(registry.apps().count(), 1);
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let signals = Signals::new();
        let mut extensions = ExtensionRegistry::new();
        let mut registry = AppRegistry::new();

        let result = registry.populate(
            vec![Box::new(Plain("demo_app.users")), Box::new(Plain("other.users"))],
            &mut extensions,
            &signals,
        );

        assert!(matches!(result, Err(StartupError::DuplicateLabel(label)) if label == "users"));
        assert!(!registry.is_ready());
    }

    #[test]
    fn test_ready_failure_leaves_registry_not_ready() {
        let signals = Signals::new();
        let mut extensions = ExtensionRegistry::new();
        let mut registry = AppRegistry::new();

        let result = registry.populate(vec![Box::new(Broken)], &mut extensions, &signals);

        assert!(matches!(result, Err(StartupError::Extension { .. })));
        assert!(!registry.is_ready());
    }
}
