// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Admission filter: decides whether a targeted input may show an overlay.

use alloc::collections::BTreeSet;
use alloc::string::String;

use crate::event::PointerInput;

/// Pure predicate over normalized input.
///
/// Four checks, AND-combined, first failure short-circuits:
///
/// 1. a target must be present and must not be the scene container;
/// 2. inclusion: an empty set admits every tag, otherwise the tag must be
///    a member;
/// 3. exclusion: an empty set excludes nothing, otherwise membership
///    rejects; exclusion dominates when a tag appears in both sets;
/// 4. the `should_begin` predicate, when set, has the final say.
///
/// No side effects; the caller owns any hide action that follows a
/// rejection.
pub struct NodeFilter<K> {
    include_types: BTreeSet<String>,
    exclude_types: BTreeSet<String>,
    should_begin: Option<fn(&PointerInput<'_, K>) -> bool>,
}

impl<K> NodeFilter<K> {
    /// A filter that admits every non-root target.
    pub fn new() -> Self {
        Self {
            include_types: BTreeSet::new(),
            exclude_types: BTreeSet::new(),
            should_begin: None,
        }
    }

    /// Restrict admission to the given type tags.
    #[must_use]
    pub fn include_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.include_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Reject the given type tags, even when also included.
    #[must_use]
    pub fn exclude_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.exclude_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Install a final user predicate, evaluated after the set checks.
    #[must_use]
    pub fn should_begin(mut self, predicate: fn(&PointerInput<'_, K>) -> bool) -> Self {
        self.should_begin = Some(predicate);
        self
    }

    /// Whether `input` may show an overlay.
    pub fn admit(&self, input: &PointerInput<'_, K>) -> bool {
        let Some(target) = &input.target else {
            return false;
        };
        if target.is_root {
            return false;
        }
        if !self.include_types.is_empty() && !self.include_types.contains(target.tag) {
            return false;
        }
        if !self.exclude_types.is_empty() && self.exclude_types.contains(target.tag) {
            return false;
        }
        match self.should_begin {
            Some(predicate) => predicate(input),
            None => true,
        }
    }
}

impl<K> Default for NodeFilter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> core::fmt::Debug for NodeFilter<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeFilter")
            .field("include_types", &self.include_types)
            .field("exclude_types", &self.exclude_types)
            .field("has_should_begin", &self.should_begin.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Target;
    use kurbo::Point;

    fn over(tag: &str) -> PointerInput<'_, u32> {
        PointerInput::scene_move(Point::new(10.0, 10.0), Some(Target::new(1, tag)))
    }

    #[test]
    fn empty_sets_admit_any_non_root_target() {
        let filter: NodeFilter<u32> = NodeFilter::new();
        for tag in ["Rect", "Ellipse", "Text"] {
            assert!(filter.admit(&over(tag)));
        }
    }

    #[test]
    fn absent_target_is_rejected() {
        let filter: NodeFilter<u32> = NodeFilter::new();
        let input = PointerInput::scene_move(Point::ZERO, None);
        assert!(!filter.admit(&input));
    }

    #[test]
    fn root_is_rejected_even_when_included() {
        let filter: NodeFilter<u32> = NodeFilter::new().include_types(["Scene"]);
        let input = PointerInput::scene_move(Point::ZERO, Some(Target::root(0, "Scene")));
        assert!(!filter.admit(&input));
    }

    #[test]
    fn inclusion_rejects_nonmembers_regardless_of_other_fields() {
        let filter: NodeFilter<u32> = NodeFilter::new()
            .include_types(["Ellipse"])
            .should_begin(|_| true);
        assert!(filter.admit(&over("Ellipse")));
        assert!(!filter.admit(&over("Rect")));
    }

    #[test]
    fn exclusion_rejects_members() {
        let filter: NodeFilter<u32> = NodeFilter::new().exclude_types(["Rect"]);
        assert!(!filter.admit(&over("Rect")));
        assert!(filter.admit(&over("Ellipse")));
    }

    // A tag present in both sets is rejected: exclusion dominates.
    #[test]
    fn exclusion_dominates_inclusion() {
        let filter: NodeFilter<u32> = NodeFilter::new()
            .include_types(["Rect", "Ellipse"])
            .exclude_types(["Rect"]);
        assert!(!filter.admit(&over("Rect")));
        assert!(filter.admit(&over("Ellipse")));
    }

    #[test]
    fn should_begin_is_evaluated_last() {
        let filter: NodeFilter<u32> = NodeFilter::new()
            .include_types(["Rect"])
            .should_begin(|input| input.position.x > 100.0);
        let near = PointerInput::scene_move(Point::new(10.0, 0.0), Some(Target::new(1, "Rect")));
        let far = PointerInput::scene_move(Point::new(200.0, 0.0), Some(Target::new(1, "Rect")));
        assert!(!filter.admit(&near));
        assert!(filter.admit(&far));
        // The predicate never rescues a failed set check.
        let wrong_tag =
            PointerInput::scene_move(Point::new(200.0, 0.0), Some(Target::new(1, "Ellipse")));
        assert!(!filter.admit(&wrong_tag));
    }
}
