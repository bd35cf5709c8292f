// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the controller and the page it mutates.

use alloc::string::String;

use kurbo::{Point, Size};

use crate::position::Viewport;

/// Readiness of the scene's root view for overlay embedding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ViewStatus {
    /// The view is not a page-embeddable element; overlays cannot be
    /// positioned against it. Not an error: the controller simply skips
    /// view-level bindings.
    Detached,
    /// The view is embeddable and accepting listeners.
    Ready,
    /// The view should be embeddable but failed to load. A caller contract
    /// violation, reported as fatal.
    Failed,
}

/// Everything the controller is allowed to touch on the page.
///
/// One implementation per host. All element operations are keyed by the
/// instance's element id (the identity-attribute value), so a surface can
/// serve several controllers. Lookups that miss are benign no-ops.
///
/// Implementations may coalesce style writes (placement, visibility) into
/// the next frame; callers must not assume synchronous visibility of style
/// changes. Content writes and measurement are synchronous: the controller
/// measures immediately after writing content.
pub trait OverlaySurface {
    /// Readiness of the scene's root view.
    fn view_status(&self) -> ViewStatus;

    /// Look up the overlay element for `instance`, creating it (carrying
    /// the identity attribute) if no matching element exists yet.
    fn ensure_element(&mut self, instance: &str);

    /// Replace the element's content.
    fn set_content(&mut self, instance: &str, content: &str);

    /// Replace the element's class attribute with a single class.
    fn set_class(&mut self, instance: &str, class: &str);

    /// Add a class to the element's class set.
    fn add_class(&mut self, instance: &str, class: &str);

    /// Remove a class from the element's class set.
    fn remove_class(&mut self, instance: &str, class: &str);

    /// Make the element visible.
    fn show(&mut self, instance: &str);

    /// Hide the element without removing it; it is reused on the next
    /// activation.
    fn hide(&mut self, instance: &str);

    /// Move the element to a document-space position.
    fn place(&mut self, instance: &str, at: Point);

    /// The element's rendered extent. Only meaningful after content has
    /// been written.
    fn measure(&self, instance: &str) -> Size;

    /// Current viewport extent and scroll offset.
    fn viewport(&self) -> Viewport;

    /// Remove the element from the page entirely.
    fn detach(&mut self, instance: &str);
}

/// A textual content provider for overlay bodies.
///
/// Implemented by the host application; invoked with the active node on
/// every transition into or within the active state. Returning an empty
/// string is a contract violation and surfaces as
/// [`Error::EmptyContent`](crate::controller::Error::EmptyContent).
pub trait ContentSource<K> {
    /// Produce the overlay body for `node`.
    fn content_of(&self, node: &K) -> String;
}

impl<K, F> ContentSource<K> for F
where
    F: Fn(&K) -> String,
{
    fn content_of(&self, node: &K) -> String {
        self(node)
    }
}
