//! Main style translation engine.

use parking_lot::RwLock;

use crate::request::StyleRequest;
use crate::rules::{AtomicRule, Registry};
use crate::theme::Theme;
use crate::types::ShorthandKey;
use crate::Result;

/// The atomic style engine.
///
/// The engine turns style requests into class names and keeps one atomic
/// rule per class name in its registry. Create one engine per build and
/// share it by reference; the registry lives exactly as long as the engine.
///
/// The engine is `Send + Sync`. Each [`translate`](Self::translate) call
/// does its check-then-insert under a single write lock, so concurrent
/// callers never register the same class twice.
pub struct StyleEngine {
    /// Value overrides for declarations.
    theme: Theme,
    /// Unique rules, in first-seen order.
    registry: RwLock<Registry>,
}

/// One resolved entry of a request, ready to register.
struct Resolved {
    key: ShorthandKey,
    class_name: String,
    value: String,
}

impl StyleEngine {
    /// Create an engine using the built-in tables.
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// Create an engine with a theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            registry: RwLock::new(Registry::new()),
        }
    }

    /// Get the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Translate a request into space-separated class names.
    ///
    /// Every present entry contributes one `key-value` class name, in
    /// request order, whether or not its rule already exists. New class
    /// names are registered with their rendered definition; existing ones
    /// are left untouched.
    ///
    /// All entries are resolved before the registry is touched, so a request
    /// with an invalid value fails without registering anything.
    pub fn translate(&self, request: &StyleRequest) -> Result<String> {
        let resolved = request
            .iter()
            .map(|(key, value)| -> Result<Resolved> {
                let css_value = self.theme.resolve_value(key, &value).inspect_err(|e| {
                    tracing::warn!("Cannot translate '{}': {}", key, e);
                })?;
                Ok(Resolved {
                    key,
                    class_name: format!("{}-{}", key, value.raw()),
                    value: css_value,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut registry = self.registry.write();
        for entry in &resolved {
            let added = registry.register_with(&entry.class_name, || {
                AtomicRule::new(entry.class_name.as_str(), entry.key, &entry.value)
            });
            if added {
                tracing::debug!("Registered atomic rule: {}", entry.class_name);
            } else {
                tracing::trace!("Atomic rule already registered: {}", entry.class_name);
            }
        }
        drop(registry);

        Ok(resolved
            .into_iter()
            .map(|entry| entry.class_name)
            .collect::<Vec<_>>()
            .join(" "))
    }

    /// All unique definitions, one per line, in first-seen order.
    ///
    /// Returns an empty string before anything has been translated.
    pub fn dump(&self) -> String {
        self.registry.read().to_css()
    }

    /// Forget every registered rule.
    ///
    /// Use between builds when one engine outlives a single build, such as
    /// in watch mode.
    pub fn reset(&self) {
        let mut registry = self.registry.write();
        let cleared = registry.len();
        registry.clear();
        tracing::info!("Cleared {} atomic rules", cleared);
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.registry.read().len()
    }

    /// Check if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }

    /// Check whether a class name is registered.
    pub fn contains(&self, class_name: &str) -> bool {
        self.registry.read().contains(class_name)
    }

    /// Rendered definition for a class name.
    pub fn definition(&self, class_name: &str) -> Option<String> {
        self.registry
            .read()
            .get(class_name)
            .map(|rule| rule.definition.clone())
    }

    /// Snapshot of all rules in registration order.
    pub fn rules(&self) -> Vec<AtomicRule> {
        self.registry.read().iter().cloned().collect()
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleEngine")
            .field("theme", &self.theme)
            .field("rules", &self.len())
            .finish()
    }
}
