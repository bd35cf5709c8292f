// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-triggered overlay over a toy scene.
//!
//! Moves a pointer across two shapes and empty canvas, printing the
//! overlay state after each input.
//!
//! Run:
//! - `cargo run -p canopy_demos --example overlay_hover`

use canopy_demos::Page;
use canopy_overlay::{Config, NodeFilter, OverlayController, PointerInput, Target};
use canopy_style::StyleRegistry;
use kurbo::Point;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(u32);

fn main() {
    let mut registry = StyleRegistry::new();
    let mut page = Page::new();

    let config = Config {
        filter: NodeFilter::new().include_types(["Rect", "Ellipse"]),
        ..Config::default()
    };
    let mut overlay = OverlayController::new(
        |node: &Node| format!("node #{}", node.0),
        config,
        &mut registry,
    );
    overlay.on_view_ready(&mut page).expect("view is ready");

    let rect = Node(1);
    let ellipse = Node(2);

    // Enter the rect.
    let input = PointerInput::scene_move(Point::new(120.0, 80.0), Some(Target::new(rect, "Rect")));
    overlay.handle_input(&mut page, &input).unwrap();
    let e = page.element(overlay.dom_id());
    println!("over rect:    visible={} at=({}, {})", e.visible, e.at.x, e.at.y);
    assert!(e.visible);
    assert_eq!(e.content, "node #1");

    // Raw motion tracks without rewriting content.
    let input = PointerInput::raw_move(Point::new(150.0, 90.0));
    overlay.handle_input(&mut page, &input).unwrap();
    let e = page.element(overlay.dom_id());
    println!("raw motion:   visible={} at=({}, {})", e.visible, e.at.x, e.at.y);
    assert_eq!(e.at, Point::new(156.0, 96.0));

    // Move to the ellipse near the right edge: x flips.
    let input = PointerInput::scene_move(
        Point::new(990.0, 40.0),
        Some(Target::new(ellipse, "Ellipse")),
    );
    overlay.handle_input(&mut page, &input).unwrap();
    let e = page.element(overlay.dom_id());
    println!("near edge:    visible={} at=({}, {})", e.visible, e.at.x, e.at.y);
    assert!(e.at.x < 990.0);

    // Empty canvas: the overlay hides but the element is kept.
    let input: PointerInput<'_, Node> = PointerInput::scene_move(Point::new(500.0, 500.0), None);
    overlay.handle_input(&mut page, &input).unwrap();
    let e = page.element(overlay.dom_id());
    println!("off nodes:    visible={}", e.visible);
    assert!(!e.visible);

    // Teardown removes the element entirely.
    let id = overlay.dom_id().to_string();
    overlay.destroy(&mut page);
    println!("destroyed:    element present={}", page.elements.contains_key(&id));
    assert!(!page.elements.contains_key(&id));
}
