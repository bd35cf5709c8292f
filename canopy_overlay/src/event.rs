// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized pointer input and the controller's subscription mask.
//!
//! ## Overview
//!
//! Host scene graphs deliver pointer information in more than one shape:
//! scene-level events carry a target node, raw view motion carries only a
//! coordinate. Both are normalized into one [`PointerInput`] record at the
//! ingestion boundary so no runtime shape-branching reaches the filter or
//! the position solver.
//!
//! Subscriptions are modeled deterministically: the controller keeps an
//! [`EventMask`] of the kinds it is currently bound to and ignores any
//! input outside the mask. Rebinding on a trigger-mode change and
//! unsubscription on teardown are mask updates; a dispatched input outside
//! the mask is a no-op, which is the observable contract of an
//! unsubscribed listener.

use kurbo::Point;

use crate::config::Trigger;

/// Kinds of normalized pointer input.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InputKind {
    /// Scene-level pointer motion, carrying the node under the pointer.
    SceneMove,
    /// Raw view motion, coordinate only; used for smooth hover tracking.
    RawMove,
    /// Discrete activation (click/tap), carrying the node under the pointer.
    Tap,
    /// The pointer left the scene's view.
    Leave,
}

impl InputKind {
    /// The mask bit corresponding to this kind.
    pub const fn bit(self) -> EventMask {
        match self {
            Self::SceneMove => EventMask::SCENE_MOVE,
            Self::RawMove => EventMask::RAW_MOVE,
            Self::Tap => EventMask::TAP,
            Self::Leave => EventMask::LEAVE,
        }
    }
}

bitflags::bitflags! {
    /// Input kinds a controller is currently subscribed to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        /// Scene-level pointer motion.
        const SCENE_MOVE = 0b0000_0001;
        /// Raw view motion (bound once the view is ready, hover mode only).
        const RAW_MOVE   = 0b0000_0010;
        /// Discrete activation.
        const TAP        = 0b0000_0100;
        /// Pointer-leaves-view auto-hide (bound with `RAW_MOVE`).
        const LEAVE      = 0b0000_1000;
    }
}

impl EventMask {
    /// The bindings a trigger mode wants.
    ///
    /// Hover tracks scene motion always, and raw motion plus leave-to-hide
    /// once the view is ready. Click tracks taps only: position is fixed at
    /// activation time, so neither motion nor leave is bound.
    pub(crate) fn for_trigger(trigger: Trigger, view_ready: bool) -> Self {
        match trigger {
            Trigger::Hover => {
                if view_ready {
                    Self::SCENE_MOVE | Self::RAW_MOVE | Self::LEAVE
                } else {
                    Self::SCENE_MOVE
                }
            }
            Trigger::Click => Self::TAP,
        }
    }
}

/// The node under the pointer, as reported by the scene graph.
///
/// The node handle is opaque to this crate: it is compared by equality
/// only, and filtered by its type tag.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Target<'a, K> {
    /// Opaque scene-node handle.
    pub node: K,
    /// The node's type tag.
    pub tag: &'a str,
    /// Whether the node is the scene container itself. The root never
    /// receives an overlay.
    pub is_root: bool,
}

impl<'a, K> Target<'a, K> {
    /// A target for an ordinary (non-root) node.
    pub const fn new(node: K, tag: &'a str) -> Self {
        Self {
            node,
            tag,
            is_root: false,
        }
    }

    /// A target for the scene container itself.
    pub const fn root(node: K, tag: &'a str) -> Self {
        Self {
            node,
            tag,
            is_root: true,
        }
    }
}

/// One normalized pointer input.
///
/// `position` is in document space: viewport coordinates plus the current
/// scroll offset. `target` is present for scene-level kinds and absent for
/// raw view motion and leave.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerInput<'a, K> {
    /// What happened.
    pub kind: InputKind,
    /// Document-space pointer position.
    pub position: Point,
    /// The node under the pointer, when the source event carried one.
    pub target: Option<Target<'a, K>>,
}

impl<'a, K> PointerInput<'a, K> {
    /// Scene-level pointer motion over `target` (or over empty canvas when
    /// `target` is `None`).
    pub const fn scene_move(position: Point, target: Option<Target<'a, K>>) -> Self {
        Self {
            kind: InputKind::SceneMove,
            position,
            target,
        }
    }

    /// Raw view motion; coordinate only.
    pub const fn raw_move(position: Point) -> Self {
        Self {
            kind: InputKind::RawMove,
            position,
            target: None,
        }
    }

    /// Discrete activation over `target` (or over empty canvas).
    pub const fn tap(position: Point, target: Option<Target<'a, K>>) -> Self {
        Self {
            kind: InputKind::Tap,
            position,
            target,
        }
    }

    /// The pointer left the scene's view. The position is not consulted.
    pub const fn leave() -> Self {
        Self {
            kind: InputKind::Leave,
            position: Point::ZERO,
            target: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_mask_grows_when_view_becomes_ready() {
        let before = EventMask::for_trigger(Trigger::Hover, false);
        assert_eq!(before, EventMask::SCENE_MOVE);
        let after = EventMask::for_trigger(Trigger::Hover, true);
        assert!(after.contains(EventMask::SCENE_MOVE | EventMask::RAW_MOVE | EventMask::LEAVE));
        assert!(!after.contains(EventMask::TAP));
    }

    #[test]
    fn click_mask_binds_taps_only() {
        for view_ready in [false, true] {
            let mask = EventMask::for_trigger(Trigger::Click, view_ready);
            assert_eq!(mask, EventMask::TAP);
        }
    }

    #[test]
    fn kind_bits_are_distinct() {
        let kinds = [
            InputKind::SceneMove,
            InputKind::RawMove,
            InputKind::Tap,
            InputKind::Leave,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert!((a.bit() & b.bit()).is_empty(), "overlapping mask bits");
            }
        }
    }
}
