// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-aware placement of a measured overlay.

use kurbo::{Point, Size, Vec2};

/// The window the overlay must stay inside.
///
/// `scroll` is the current scroll offset; pointer positions are in document
/// space (viewport coordinates plus scroll), so the visible document range
/// on each axis is `[scroll, scroll + size]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Viewport extent.
    pub size: Size,
    /// Current scroll offset.
    pub scroll: Vec2,
}

/// Compute the overlay's document-space position.
///
/// The base position is the pointer plus the offset. Independently per
/// axis, when the base position plus the overlay extent would run past the
/// visible edge, that axis flips to the opposite side of the pointer:
/// `pointer - extent - offset`. One flip attempt per axis and no iterative
/// re-clamping, so an overlay larger than the viewport may still clip at
/// the flipped position.
///
/// Pure. The overlay must already be rendered and measured: `overlay` is
/// its current extent, which depends on its content.
pub fn solve(pointer: Point, overlay: Size, viewport: Viewport, offset: Vec2) -> Point {
    let limit_x = viewport.size.width + viewport.scroll.x;
    let x = if pointer.x + offset.x + overlay.width > limit_x {
        pointer.x - overlay.width - offset.x
    } else {
        pointer.x + offset.x
    };

    let limit_y = viewport.size.height + viewport.scroll.y;
    let y = if pointer.y + offset.y + overlay.height > limit_y {
        pointer.y - overlay.height - offset.y
    } else {
        pointer.y + offset.y
    };

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        size: Size::new(1000.0, 800.0),
        scroll: Vec2::ZERO,
    };

    #[test]
    fn no_flip_in_open_space() {
        let at = solve(
            Point::new(100.0, 100.0),
            Size::new(50.0, 20.0),
            VIEW,
            Vec2::new(6.0, 6.0),
        );
        assert_eq!(at, Point::new(106.0, 106.0));
    }

    // Near the right edge x flips, y stays.
    #[test]
    fn flips_x_at_right_edge() {
        let at = solve(
            Point::new(990.0, 10.0),
            Size::new(50.0, 20.0),
            VIEW,
            Vec2::new(6.0, 6.0),
        );
        assert_eq!(at, Point::new(934.0, 16.0));
    }

    #[test]
    fn flips_y_at_bottom_edge() {
        let at = solve(
            Point::new(10.0, 795.0),
            Size::new(50.0, 20.0),
            VIEW,
            Vec2::new(6.0, 6.0),
        );
        assert_eq!(at, Point::new(16.0, 795.0 - 20.0 - 6.0));
    }

    #[test]
    fn flips_both_axes_in_the_corner() {
        let at = solve(
            Point::new(995.0, 798.0),
            Size::new(40.0, 30.0),
            VIEW,
            Vec2::new(6.0, 6.0),
        );
        assert_eq!(at, Point::new(995.0 - 40.0 - 6.0, 798.0 - 30.0 - 6.0));
    }

    // Scrolling moves the visible range, so a pointer past the unscrolled
    // edge does not flip when the scrolled window still fits the overlay.
    #[test]
    fn scroll_offset_extends_the_limit() {
        let scrolled = Viewport {
            size: Size::new(1000.0, 800.0),
            scroll: Vec2::new(500.0, 0.0),
        };
        let at = solve(
            Point::new(1200.0, 10.0),
            Size::new(50.0, 20.0),
            scrolled,
            Vec2::new(6.0, 6.0),
        );
        assert_eq!(at, Point::new(1206.0, 16.0));
    }

    // One flip attempt only: an overlay wider than the viewport clips.
    #[test]
    fn oversized_overlay_clips_at_flipped_position() {
        let at = solve(
            Point::new(990.0, 10.0),
            Size::new(1200.0, 20.0),
            VIEW,
            Vec2::new(6.0, 6.0),
        );
        assert_eq!(at.x, 990.0 - 1200.0 - 6.0);
        assert!(at.x < 0.0);
    }

    #[test]
    fn exact_fit_does_not_flip() {
        // 944 + 6 + 50 == 1000: touching the edge is still inside.
        let at = solve(
            Point::new(944.0, 10.0),
            Size::new(50.0, 20.0),
            VIEW,
            Vec2::new(6.0, 6.0),
        );
        assert_eq!(at, Point::new(950.0, 16.0));
    }
}
