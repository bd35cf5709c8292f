// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixture for the runnable demos: a tiny in-memory page.
//!
//! The demos (`overlay_hover`, `overlay_click`, `scoped_rules`) drive a
//! controller against [`Page`], which records element state the way a real
//! host would render it.

use std::collections::BTreeMap;

use canopy_overlay::{OverlaySurface, ViewStatus, Viewport};
use kurbo::{Point, Size, Vec2};

/// One overlay element as the page sees it.
#[derive(Clone, Debug, Default)]
pub struct Element {
    /// Current body text.
    pub content: String,
    /// Current class set.
    pub classes: Vec<String>,
    /// Whether the element is displayed.
    pub visible: bool,
    /// Document-space position.
    pub at: Point,
}

/// An in-memory page: elements keyed by identity, a fixed viewport, and a
/// content-proportional measurer.
#[derive(Debug, Default)]
pub struct Page {
    /// Elements keyed by their identity-attribute value.
    pub elements: BTreeMap<String, Element>,
    /// Reported viewport metrics.
    pub viewport: Viewport,
}

impl Page {
    /// A page with a 1000×800 unscrolled viewport.
    pub fn new() -> Self {
        Self {
            elements: BTreeMap::new(),
            viewport: Viewport {
                size: Size::new(1000.0, 800.0),
                scroll: Vec2::ZERO,
            },
        }
    }

    /// The element for `id`.
    ///
    /// # Panics
    ///
    /// Panics when no element with that identity exists.
    pub fn element(&self, id: &str) -> &Element {
        &self.elements[id]
    }
}

impl OverlaySurface for Page {
    fn view_status(&self) -> ViewStatus {
        ViewStatus::Ready
    }

    fn ensure_element(&mut self, instance: &str) {
        self.elements.entry(instance.to_string()).or_default();
    }

    fn set_content(&mut self, instance: &str, content: &str) {
        if let Some(e) = self.elements.get_mut(instance) {
            e.content = content.to_string();
        }
    }

    fn set_class(&mut self, instance: &str, class: &str) {
        if let Some(e) = self.elements.get_mut(instance) {
            e.classes = vec![class.to_string()];
        }
    }

    fn add_class(&mut self, instance: &str, class: &str) {
        if let Some(e) = self.elements.get_mut(instance)
            && !e.classes.iter().any(|c| c == class)
        {
            e.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, instance: &str, class: &str) {
        if let Some(e) = self.elements.get_mut(instance) {
            e.classes.retain(|c| c != class);
        }
    }

    fn show(&mut self, instance: &str) {
        if let Some(e) = self.elements.get_mut(instance) {
            e.visible = true;
        }
    }

    fn hide(&mut self, instance: &str) {
        if let Some(e) = self.elements.get_mut(instance) {
            e.visible = false;
        }
    }

    fn place(&mut self, instance: &str, at: Point) {
        if let Some(e) = self.elements.get_mut(instance) {
            e.at = at;
        }
    }

    fn measure(&self, instance: &str) -> Size {
        // Width tracks the content so edge flipping is visible in demos.
        let chars = self
            .elements
            .get(instance)
            .map(|e| e.content.len())
            .unwrap_or(0);
        Size::new(8.0 * chars as f64, 20.0)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn detach(&mut self, instance: &str) {
        self.elements.remove(instance);
    }
}
