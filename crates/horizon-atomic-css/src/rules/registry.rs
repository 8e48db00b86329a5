//! Deduplicating collection of atomic rules.

use std::collections::HashMap;

use crate::rules::AtomicRule;

/// Every unique atomic rule produced so far.
///
/// Holds at most one rule per class name. Rules keep the order in which
/// their class names were first registered, and that order drives output.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Rules in registration order.
    rules: Vec<AtomicRule>,
    /// Class name to index into `rules`.
    index: HashMap<String, usize>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a class name is registered.
    pub fn contains(&self, class_name: &str) -> bool {
        self.index.contains_key(class_name)
    }

    /// Get the rule for a class name.
    pub fn get(&self, class_name: &str) -> Option<&AtomicRule> {
        self.index.get(class_name).map(|&i| &self.rules[i])
    }

    /// Register the rule for `class_name` unless one already exists.
    ///
    /// `make` only runs for a new class name. The rule's order is set from
    /// the current number of rules. Returns `true` if a rule was added.
    pub fn register_with<F>(&mut self, class_name: &str, make: F) -> bool
    where
        F: FnOnce() -> AtomicRule,
    {
        if self.contains(class_name) {
            return false;
        }
        let mut rule = make();
        rule.order = self.rules.len() as u32;
        self.index.insert(class_name.to_owned(), self.rules.len());
        self.rules.push(rule);
        true
    }

    /// Register a pre-built rule under its own class name.
    #[cfg(test)]
    fn register(&mut self, rule: AtomicRule) -> bool {
        let class_name = rule.class_name.clone();
        self.register_with(&class_name, || rule)
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &AtomicRule> {
        self.rules.iter()
    }

    /// All definitions, one per line, in registration order.
    pub fn to_css(&self) -> String {
        self.rules
            .iter()
            .map(|rule| rule.definition.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Clear all rules.
    pub fn clear(&mut self) {
        self.rules.clear();
        self.index.clear();
    }
}
