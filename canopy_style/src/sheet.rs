// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single stylesheet: an ordered rule list tagged with its family marker.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::rule::StyleRule;

/// Rule storage for a sheet.
///
/// `Rules` is the normal structured form. `Text` is the degraded form for
/// environments without a structured rule API: rule insertions append
/// serialized text instead of failing, and index-based lookup and removal
/// report "not found" (a benign miss, never an error).
#[derive(Clone, Debug)]
enum Storage {
    Rules(Vec<StyleRule>),
    Text(String),
}

/// One stylesheet shared by every overlay instance of a family.
///
/// The family marker plays the role of the identity attribute on a
/// `<style>` element: [`StyleRegistry::ensure_sheet`](crate::StyleRegistry::ensure_sheet)
/// looks sheets up by it so that at most one default-family sheet exists per
/// registry.
#[derive(Clone, Debug)]
pub struct Sheet {
    family: String,
    storage: Storage,
}

impl Sheet {
    /// Create an empty structured sheet for `family`.
    pub fn structured(family: &str) -> Self {
        Self {
            family: family.to_string(),
            storage: Storage::Rules(Vec::new()),
        }
    }

    /// Create an empty text-fallback sheet for `family`.
    pub fn text_fallback(family: &str) -> Self {
        Self {
            family: family.to_string(),
            storage: Storage::Text(String::new()),
        }
    }

    /// The family marker this sheet is tagged with.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Whether the sheet supports structured rule lookup and removal.
    pub fn supports_rules(&self) -> bool {
        matches!(self.storage, Storage::Rules(_))
    }

    /// Number of structured rules. A text-fallback sheet reports zero.
    pub fn rule_count(&self) -> usize {
        match &self.storage {
            Storage::Rules(rules) => rules.len(),
            Storage::Text(_) => 0,
        }
    }

    /// The rule at `index`, if the sheet is structured and `index` is live.
    pub fn rule_at(&self, index: usize) -> Option<&StyleRule> {
        match &self.storage {
            Storage::Rules(rules) => rules.get(index),
            Storage::Text(_) => None,
        }
    }

    /// Insert a rule at index 0.
    ///
    /// Newest-first insertion makes the most recent rule win source-order
    /// tie-breaks at equal selector specificity. On a text-fallback sheet
    /// the serialized rule is appended to the buffer instead.
    pub fn insert_front(&mut self, rule: StyleRule) {
        match &mut self.storage {
            Storage::Rules(rules) => rules.insert(0, rule),
            Storage::Text(text) => {
                text.push_str(&rule.css_text());
                text.push('\n');
            }
        }
    }

    /// Index of the rule whose selector text equals `selector` exactly.
    ///
    /// String equality, not semantic CSS equivalence: a formatting
    /// difference (for example an unquoted attribute value) is a miss.
    pub fn find(&self, selector: &str) -> Option<usize> {
        match &self.storage {
            Storage::Rules(rules) => rules.iter().position(|r| r.selector() == selector),
            Storage::Text(_) => None,
        }
    }

    /// Remove the rule whose selector text equals `selector` exactly.
    ///
    /// Returns whether a rule was removed; a miss is a no-op.
    pub fn remove(&mut self, selector: &str) -> bool {
        match &mut self.storage {
            Storage::Rules(rules) => match rules.iter().position(|r| r.selector() == selector) {
                Some(index) => {
                    rules.remove(index);
                    true
                }
                None => false,
            },
            Storage::Text(_) => false,
        }
    }

    /// Serialize the whole sheet to CSS text.
    pub fn css_text(&self) -> String {
        match &self.storage {
            Storage::Rules(rules) => {
                let mut out = String::new();
                for rule in rules {
                    out.push_str(&rule.css_text());
                    out.push('\n');
                }
                out
            }
            Storage::Text(text) => text.clone(),
        }
    }
}
