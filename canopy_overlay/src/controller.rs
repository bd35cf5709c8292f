// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller implementation.
//!
//! ## Overview
//!
//! Owns one overlay instance and drives it from normalized pointer input:
//! admission filtering, content acquisition, measurement, placement, and
//! the trigger-mode state machine.
//!
//! ## States
//!
//! - Idle: no active node, overlay hidden (the element is kept for reuse).
//! - Active: an active node is set, overlay visible and positioned.
//!
//! Within one input, evaluation is strictly ordered: filter, then content,
//! then measurement, then placement, then mutation. Placement depends on
//! the measured extent, which depends on the content already being written.
//!
//! ## See Also
//!
//! [`filter`](crate::filter) for admission, [`position`](crate::position)
//! for placement, and [`canopy_style`] for the scoped-rule registry shared
//! across controllers.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use tracing::{debug, trace};

use canopy_style::{Declarations, RuleBody, SheetId, StyleRegistry, StyleRule};

use crate::config::{Config, Trigger};
use crate::event::{EventMask, InputKind, PointerInput};
use crate::position;
use crate::surface::{ContentSource, OverlaySurface, ViewStatus};

/// Class shared by every default-styled overlay element, and the family
/// marker of the shared sheet.
pub const FAMILY_CLASS: &str = "canopy-overlay";

/// Fatal errors: caller contract violations, never recovered internally.
///
/// Best-effort misses (rule not found, element not found) are not errors;
/// they are `bool`/`Option` results or silent no-ops.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The content source returned an empty body for the active node.
    #[error("canopy-overlay: content source returned an empty body")]
    EmptyContent,
    /// The root view reported ready but cannot accept listeners.
    #[error("canopy-overlay: root view failed to load")]
    ViewUnavailable,
}

/// The default rule set inserted when the shared family sheet is first
/// created.
fn base_rules() -> Vec<StyleRule> {
    vec![StyleRule::new(
        format!(".{FAMILY_CLASS}"),
        Declarations::new()
            .with("position", "absolute")
            .with("display", "none")
            .with("padding", "8px 10px")
            .with("backgroundColor", "#fff")
            .with("borderRadius", "2px")
            .with("boxShadow", "0 0 4px #e2e2e2"),
    )]
}

/// Controller for one overlay instance.
///
/// ## Usage
///
/// - Construct with [`OverlayController::new`], passing the page's
///   [`StyleRegistry`] so the instance gets its identity and (unless a
///   custom class bypasses it) the shared family sheet.
/// - Feed every normalized pointer input to
///   [`OverlayController::handle_input`] and forward the scene's
///   view-ready lifecycle event to [`OverlayController::on_view_ready`].
///   Input kinds outside the current subscription mask are ignored, so the
///   host can dispatch unconditionally.
/// - Switch activation modes with [`OverlayController::set_trigger`]; tear
///   down with [`OverlayController::destroy`], which consumes the
///   controller.
///
/// The controller exclusively owns its overlay instance; nothing is shared
/// across controllers except the family sheet inside the registry.
pub struct OverlayController<K, C: ContentSource<K>> {
    content: C,
    config: Config<K>,
    dom_id: String,
    sheet: Option<SheetId>,
    active: Option<K>,
    mask: EventMask,
    view_ready: bool,
}

impl<K: Copy + Eq, C: ContentSource<K>> OverlayController<K, C> {
    /// Create a controller in the idle state.
    ///
    /// Allocates the instance identity from `registry`. Without a custom
    /// class, the shared family sheet is ensured here: the first
    /// controller on a page creates it, later ones reuse it.
    pub fn new(content: C, config: Config<K>, registry: &mut StyleRegistry) -> Self {
        let id = registry.allocate_id();
        let dom_id = format!("{FAMILY_CLASS}--{}", id.get());
        let sheet = if config.class_name.is_none() {
            Some(registry.ensure_sheet(FAMILY_CLASS, base_rules))
        } else {
            None
        };
        let mask = EventMask::for_trigger(config.trigger, false);
        debug!(id = %dom_id, trigger = ?config.trigger, "overlay controller created");
        Self {
            content,
            config,
            dom_id,
            sheet,
            active: None,
            mask,
            view_ready: false,
        }
    }

    /// The instance's element id (the identity-attribute value).
    pub fn dom_id(&self) -> &str {
        &self.dom_id
    }

    /// The current trigger mode.
    pub fn trigger(&self) -> Trigger {
        self.config.trigger
    }

    /// The node the overlay is currently shown for, if any.
    pub fn active_node(&self) -> Option<K> {
        self.active
    }

    /// The input kinds the controller is currently subscribed to.
    pub fn mask(&self) -> EventMask {
        self.mask
    }

    /// Handle one normalized pointer input.
    ///
    /// Inputs whose kind is outside the subscription mask are ignored.
    pub fn handle_input(
        &mut self,
        surface: &mut impl OverlaySurface,
        input: &PointerInput<'_, K>,
    ) -> Result<(), Error> {
        if !self.mask.contains(input.kind.bit()) {
            return Ok(());
        }
        match input.kind {
            InputKind::SceneMove | InputKind::Tap => self.on_targeted(surface, input),
            InputKind::RawMove => {
                self.track(surface, input.position);
                Ok(())
            }
            InputKind::Leave => {
                self.deactivate(surface);
                Ok(())
            }
        }
    }

    /// Forward the scene's view-ready lifecycle event.
    ///
    /// A detached view (not a page-embeddable element) is a silent no-op.
    /// A view that reports ready but cannot accept listeners is a fatal
    /// [`Error::ViewUnavailable`]. Otherwise hover mode gains its motion
    /// and leave bindings.
    pub fn on_view_ready(&mut self, surface: &mut impl OverlaySurface) -> Result<(), Error> {
        match surface.view_status() {
            ViewStatus::Detached => Ok(()),
            ViewStatus::Failed => Err(Error::ViewUnavailable),
            ViewStatus::Ready => {
                self.view_ready = true;
                self.mask = EventMask::for_trigger(self.config.trigger, true);
                debug!(id = %self.dom_id, "view ready, motion bindings installed");
                Ok(())
            }
        }
    }

    /// Switch the trigger mode, rebinding subscriptions and forcing the
    /// idle state. A no-op when the mode is unchanged.
    pub fn set_trigger(&mut self, surface: &mut impl OverlaySurface, trigger: Trigger) {
        if trigger == self.config.trigger {
            return;
        }
        debug!(id = %self.dom_id, from = ?self.config.trigger, to = ?trigger, "trigger change");
        self.config.trigger = trigger;
        self.mask = EventMask::for_trigger(trigger, self.view_ready);
        self.deactivate(surface);
    }

    /// Tear the instance down: the overlay element is removed from the
    /// page and the controller is consumed. All subscriptions end with it.
    pub fn destroy(self, surface: &mut impl OverlaySurface) {
        surface.detach(&self.dom_id);
        debug!(id = %self.dom_id, "overlay controller destroyed");
    }

    /// Insert a style rule scoped to this instance.
    ///
    /// The rule's selector is qualified with this instance's identity
    /// attribute, so it never affects another controller's overlay.
    pub fn create_style_rule(
        &mut self,
        registry: &mut StyleRegistry,
        selector: &str,
        body: impl Into<RuleBody>,
    ) {
        let sheet = self.ensure_sheet(registry);
        registry.create_rule(sheet, selector, body, &self.dom_id);
    }

    /// Remove this instance's rule for `selector`. Returns whether a rule
    /// was removed; a miss is a no-op.
    pub fn remove_style_rule(&mut self, registry: &mut StyleRegistry, selector: &str) -> bool {
        match self.sheet {
            Some(sheet) => registry.remove_rule(sheet, selector, &self.dom_id),
            None => false,
        }
    }

    /// Index of this instance's rule for `selector`, if present.
    pub fn find_style_rule(&self, registry: &StyleRegistry, selector: &str) -> Option<usize> {
        self.sheet
            .and_then(|sheet| registry.find_rule(sheet, selector, &self.dom_id))
    }

    /// Add a class to the overlay element.
    pub fn add_class(&self, surface: &mut impl OverlaySurface, class: &str) {
        surface.ensure_element(&self.dom_id);
        surface.add_class(&self.dom_id, class);
    }

    /// Remove a class from the overlay element. A miss is a no-op.
    pub fn remove_class(&self, surface: &mut impl OverlaySurface, class: &str) {
        surface.ensure_element(&self.dom_id);
        surface.remove_class(&self.dom_id, class);
    }

    /// Add several classes to the overlay element.
    pub fn add_classes<'s>(
        &self,
        surface: &mut impl OverlaySurface,
        classes: impl IntoIterator<Item = &'s str>,
    ) {
        surface.ensure_element(&self.dom_id);
        for class in classes {
            surface.add_class(&self.dom_id, class);
        }
    }

    /// Remove several classes from the overlay element. Misses are no-ops.
    pub fn remove_classes<'s>(
        &self,
        surface: &mut impl OverlaySurface,
        classes: impl IntoIterator<Item = &'s str>,
    ) {
        surface.ensure_element(&self.dom_id);
        for class in classes {
            surface.remove_class(&self.dom_id, class);
        }
    }

    /// The family sheet, ensured lazily for custom-class controllers that
    /// only need it once the rule API is first used.
    fn ensure_sheet(&mut self, registry: &mut StyleRegistry) -> SheetId {
        match self.sheet {
            Some(sheet) => sheet,
            None => {
                let sheet = registry.ensure_sheet(FAMILY_CLASS, base_rules);
                self.sheet = Some(sheet);
                sheet
            }
        }
    }

    /// Shared path for targeted input (scene motion and taps).
    fn on_targeted(
        &mut self,
        surface: &mut impl OverlaySurface,
        input: &PointerInput<'_, K>,
    ) -> Result<(), Error> {
        if !self.config.filter.admit(input) {
            self.deactivate(surface);
            return Ok(());
        }
        // Admission implies a target is present.
        let Some(target) = input.target else {
            return Ok(());
        };
        if input.kind == InputKind::Tap && self.active == Some(target.node) {
            // Clicking the active node again toggles it off.
            self.deactivate(surface);
            return Ok(());
        }
        self.activate(surface, target.node, input.position)
    }

    /// Enter (or continue) the active state for `node` at `pointer`.
    fn activate(
        &mut self,
        surface: &mut impl OverlaySurface,
        node: K,
        pointer: Point,
    ) -> Result<(), Error> {
        // The content contract is checked on every pass, but the body is
        // only rewritten when the active node changes.
        let content = self.content.content_of(&node);
        if content.is_empty() {
            return Err(Error::EmptyContent);
        }
        let entering = self.active != Some(node);
        surface.ensure_element(&self.dom_id);
        if entering {
            surface.set_content(&self.dom_id, &content);
            match &self.config.class_name {
                Some(class) => surface.set_class(&self.dom_id, class),
                None => surface.set_class(&self.dom_id, FAMILY_CLASS),
            }
            trace!(id = %self.dom_id, "overlay activated");
        }
        self.active = Some(node);
        let extent = surface.measure(&self.dom_id);
        let at = position::solve(
            pointer,
            extent,
            surface.viewport(),
            self.config.offset.to_vec2(),
        );
        surface.place(&self.dom_id, at);
        surface.show(&self.dom_id);
        Ok(())
    }

    /// Reposition against the current pointer without touching content.
    fn track(&mut self, surface: &mut impl OverlaySurface, pointer: Point) {
        if self.active.is_none() {
            return;
        }
        let extent = surface.measure(&self.dom_id);
        let at = position::solve(
            pointer,
            extent,
            surface.viewport(),
            self.config.offset.to_vec2(),
        );
        surface.place(&self.dom_id, at);
    }

    /// Return to idle, hiding the overlay if it was visible. The element
    /// stays on the page for reuse.
    fn deactivate(&mut self, surface: &mut impl OverlaySurface) {
        if self.active.take().is_some() {
            surface.hide(&self.dom_id);
            trace!(id = %self.dom_id, "overlay hidden");
        }
    }
}

impl<K, C: ContentSource<K>> core::fmt::Debug for OverlayController<K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OverlayController")
            .field("dom_id", &self.dom_id)
            .field("trigger", &self.config.trigger)
            .field("active", &self.active.is_some())
            .field("mask", &self.mask)
            .finish_non_exhaustive()
    }
}
