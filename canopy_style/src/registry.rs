// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page-scoped registry: sheet ownership, instance identity, and the
//! scoped-rule operations.

use alloc::vec::Vec;

use crate::rule::{RuleBody, StyleRule, scoped_selector};
use crate::sheet::Sheet;

/// Handle to a sheet owned by a [`StyleRegistry`].
///
/// Sheets live for the registry's lifetime and are never removed, so the
/// handle is a plain index. Handles are only meaningful for the registry
/// that produced them; a handle presented to another registry resolves
/// best-effort (operations on an unknown handle are benign no-ops).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SheetId(u32);

impl SheetId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Sheet handles are intentionally 32-bit; a page never holds that many sheets."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Identity allocated to one overlay instance.
///
/// Monotonically increasing within a registry; never reused. The numeric
/// value is rendered into the instance's element id and identity attribute
/// by the overlay layer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct InstanceId(u32);

impl InstanceId {
    /// The raw allocation number.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Owner of every sheet on a page and allocator of instance identity.
///
/// Construct one per page (or process) and pass it by reference to each
/// overlay controller. All mutation happens on the single event-processing
/// thread; "first instance wins, later instances reuse" falls out of
/// [`ensure_sheet`](Self::ensure_sheet) being a lookup-or-create.
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    sheets: Vec<Sheet>,
    next_instance: u32,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh instance identity.
    pub fn allocate_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;
        id
    }

    /// Look up the sheet tagged with `family`, creating it on first use.
    ///
    /// On creation, `defaults` supplies the family's base rule set; the
    /// rules are inserted in order (first element ends up first). Later
    /// calls reuse the existing sheet and never re-evaluate `defaults`, so
    /// at most one sheet per family exists per registry.
    pub fn ensure_sheet(
        &mut self,
        family: &str,
        defaults: impl FnOnce() -> Vec<StyleRule>,
    ) -> SheetId {
        if let Some(idx) = self.sheets.iter().position(|s| s.family() == family) {
            return SheetId::new(idx);
        }
        let mut sheet = Sheet::structured(family);
        for rule in defaults().into_iter().rev() {
            sheet.insert_front(rule);
        }
        self.sheets.push(sheet);
        SheetId::new(self.sheets.len() - 1)
    }

    /// Like [`ensure_sheet`](Self::ensure_sheet), for environments without a
    /// structured rule API: the created sheet stores serialized rule text.
    ///
    /// If a sheet for `family` already exists (of either storage kind) it is
    /// reused as-is.
    pub fn ensure_text_sheet(&mut self, family: &str) -> SheetId {
        if let Some(idx) = self.sheets.iter().position(|s| s.family() == family) {
            return SheetId::new(idx);
        }
        self.sheets.push(Sheet::text_fallback(family));
        SheetId::new(self.sheets.len() - 1)
    }

    /// The sheet behind a handle, if it belongs to this registry.
    pub fn sheet(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.get(id.idx())
    }

    /// Number of sheets tagged with `family`.
    ///
    /// Stays at one for any family managed through
    /// [`ensure_sheet`](Self::ensure_sheet), regardless of how many overlay
    /// instances share it.
    pub fn sheet_count(&self, family: &str) -> usize {
        self.sheets.iter().filter(|s| s.family() == family).count()
    }

    /// Insert a rule scoped to `instance` at the front of `sheet`.
    ///
    /// The stored selector is the quoted compound form produced by
    /// [`scoped_selector`]; it only matches elements carrying that
    /// instance's identity attribute.
    pub fn create_rule(
        &mut self,
        sheet: SheetId,
        selector: &str,
        body: impl Into<RuleBody>,
        instance: &str,
    ) {
        let Some(sheet) = self.sheets.get_mut(sheet.idx()) else {
            return;
        };
        sheet.insert_front(StyleRule::new(scoped_selector(selector, instance), body));
    }

    /// Index of the rule scoped to `instance` for `selector`, if present.
    pub fn find_rule(&self, sheet: SheetId, selector: &str, instance: &str) -> Option<usize> {
        self.sheet(sheet)?.find(&scoped_selector(selector, instance))
    }

    /// Remove the rule scoped to `instance` for `selector`.
    ///
    /// Returns whether a rule was removed; a miss (including an unknown
    /// sheet handle) is a no-op, never an error.
    pub fn remove_rule(&mut self, sheet: SheetId, selector: &str, instance: &str) -> bool {
        match self.sheets.get_mut(sheet.idx()) {
            Some(sheet) => sheet.remove(&scoped_selector(selector, instance)),
            None => false,
        }
    }
}
