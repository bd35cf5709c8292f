// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule building blocks: declaration blocks, rule bodies, and scoped selectors.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Attribute carried by every overlay element to mark which instance owns it.
///
/// Scoped selectors qualify on this attribute so a rule created for one
/// instance never matches another instance's element.
pub const IDENTITY_ATTR: &str = "data-canopy-id";

/// Convert a camelCase property name to its kebab-case CSS form.
///
/// A leading capital produces a leading dash, so `WebkitTransform` becomes
/// `-webkit-transform` (the vendor-prefix convention). Names already in
/// kebab-case pass through unchanged.
fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// An ordered declaration block.
///
/// Property names are normalized to kebab-case on insertion; setting a
/// property that is already present replaces its value in place, preserving
/// the original declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Declarations {
    props: Vec<(String, String)>,
}

impl Declarations {
    /// Create an empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.set(property, value);
        self
    }

    /// Set a property, replacing any existing value for the same name.
    ///
    /// `property` may be camelCase or kebab-case; it is stored kebab-case.
    pub fn set(&mut self, property: &str, value: &str) {
        let property = camel_to_kebab(property);
        if let Some(slot) = self.props.iter_mut().find(|(p, _)| *p == property) {
            slot.1 = value.to_string();
        } else {
            self.props.push((property, value.to_string()));
        }
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether the block has no declarations.
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Serialize to declaration text, e.g. `color: red; padding: 4px;`.
    pub fn to_css_text(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.props.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push(';');
        }
        out
    }
}

/// The body of a rule: either raw declaration text or a structured block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleBody {
    /// Raw declaration text, passed through as-is (trimmed).
    Text(String),
    /// A structured declaration block, serialized on demand.
    Declarations(Declarations),
}

impl RuleBody {
    /// Serialize the body to declaration text.
    pub fn to_css_text(&self) -> String {
        match self {
            Self::Text(t) => t.trim().to_string(),
            Self::Declarations(d) => d.to_css_text(),
        }
    }
}

impl From<&str> for RuleBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RuleBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Declarations> for RuleBody {
    fn from(decls: Declarations) -> Self {
        Self::Declarations(decls)
    }
}

/// A single rule in a [`Sheet`](crate::Sheet): selector text plus a
/// serialized declaration body.
///
/// The selector text is the rule's identity within a sheet; lookups compare
/// it by exact string equality, not semantic CSS equivalence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    selector: String,
    body: String,
}

impl StyleRule {
    /// Create a rule from selector text and a body.
    pub fn new(selector: impl Into<String>, body: impl Into<RuleBody>) -> Self {
        Self {
            selector: selector.into(),
            body: body.into().to_css_text(),
        }
    }

    /// The selector text.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The serialized declaration body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Serialize the whole rule, e.g. `.hint { color: red; }`.
    pub fn css_text(&self) -> String {
        let mut out = String::with_capacity(self.selector.len() + self.body.len() + 4);
        out.push_str(&self.selector);
        out.push_str(" { ");
        out.push_str(&self.body);
        out.push_str(" }");
        out
    }
}

/// Compose the compound selector that scopes `selector` to one instance.
///
/// The attribute value is always double-quoted. Creation, lookup, and
/// removal must all go through this function: selector text is matched by
/// exact string equality, so a quoting mismatch makes a rule unfindable.
pub fn scoped_selector(selector: &str, instance: &str) -> String {
    let mut out = String::with_capacity(selector.len() + IDENTITY_ATTR.len() + instance.len() + 5);
    out.push_str(selector);
    out.push('[');
    out.push_str(IDENTITY_ATTR);
    out.push_str("=\"");
    out.push_str(instance);
    out.push_str("\"]");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_conversion() {
        assert_eq!(camel_to_kebab("backgroundColor"), "background-color");
        assert_eq!(camel_to_kebab("boxShadow"), "box-shadow");
        assert_eq!(camel_to_kebab("WebkitTransform"), "-webkit-transform");
        // Already-kebab names pass through.
        assert_eq!(camel_to_kebab("border-radius"), "border-radius");
        assert_eq!(camel_to_kebab("color"), "color");
    }

    #[test]
    fn declarations_preserve_order_and_replace_in_place() {
        let mut d = Declarations::new();
        d.set("backgroundColor", "#fff");
        d.set("color", "red");
        d.set("backgroundColor", "#000");
        assert_eq!(d.len(), 2);
        assert_eq!(d.to_css_text(), "background-color: #000; color: red;");
    }

    #[test]
    fn rule_body_from_text_is_trimmed() {
        let body: RuleBody = "  color: red;  ".into();
        assert_eq!(body.to_css_text(), "color: red;");
    }

    #[test]
    fn rule_css_text() {
        let rule = StyleRule::new(".hint", Declarations::new().with("color", "red"));
        assert_eq!(rule.css_text(), ".hint { color: red; }");
    }

    #[test]
    fn scoped_selector_quotes_attribute_value() {
        let s = scoped_selector(".hint", "canopy-overlay--7");
        assert_eq!(s, ".hint[data-canopy-id=\"canopy-overlay--7\"]");
    }

    // The unquoted spelling matches the same elements in CSS but is a
    // different string; it must never be produced anywhere.
    #[test]
    fn scoped_selector_differs_from_unquoted_spelling() {
        let quoted = scoped_selector(".hint", "a1");
        assert_ne!(quoted, ".hint[data-canopy-id=a1]");
    }
}
