//! Single atomic rule definition.

use std::fmt;

use crate::tables;
use crate::types::ShorthandKey;

/// One `property: value;` fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Real CSS property name.
    pub property: &'static str,
    /// Resolved CSS value.
    pub value: String,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// A class selector with its declarations.
///
/// Each rule has:
/// - The class name (`p-4`), which is also its identity in the registry
/// - One declaration per real CSS property the shorthand expands to
/// - The rendered definition text, computed once at creation
/// - Registration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicRule {
    /// The class name, without the leading dot.
    pub class_name: String,
    /// Declarations in emission order.
    pub declarations: Vec<Declaration>,
    /// Rendered `.class { ... }` text.
    pub definition: String,
    /// Registration order within the owning registry.
    pub order: u32,
}

impl AtomicRule {
    /// Build a rule for a shorthand key and its resolved CSS value.
    ///
    /// Compound keys share the value across every expanded property.
    pub fn new(class_name: impl Into<String>, key: ShorthandKey, value: &str) -> Self {
        let declarations = tables::resolve_property_names(key)
            .iter()
            .copied()
            .map(|property| Declaration {
                property,
                value: value.to_owned(),
            })
            .collect();
        Self::from_declarations(class_name, declarations)
    }

    /// Build a rule from explicit declarations.
    pub fn from_declarations(class_name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        let class_name = class_name.into();
        let body = declarations
            .iter()
            .map(Declaration::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let definition = format!(".{class_name} {{ {body} }}");
        Self {
            class_name,
            declarations,
            definition,
            order: 0,
        }
    }
}

impl fmt::Display for AtomicRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_property_rule() {
        let rule = AtomicRule::new("p-4", ShorthandKey::P, "16px");
        assert_eq!(rule.definition, ".p-4 { padding: 16px; }");
        assert_eq!(rule.declarations.len(), 1);
    }

    #[test]
    fn compound_rule_keeps_property_order() {
        let rule = AtomicRule::new("mx-5", ShorthandKey::Mx, "24px");
        assert_eq!(
            rule.to_string(),
            ".mx-5 { margin-left: 24px; margin-right: 24px; }"
        );

        let rule = AtomicRule::new("py-2", ShorthandKey::Py, "8px");
        assert_eq!(
            rule.to_string(),
            ".py-2 { padding-top: 8px; padding-bottom: 8px; }"
        );
    }
}
