// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-triggered overlay: taps toggle, position is fixed at activation.
//!
//! Run:
//! - `cargo run -p canopy_demos --example overlay_click`

use canopy_demos::Page;
use canopy_overlay::{Config, OverlayController, PointerInput, Target, Trigger};
use canopy_style::StyleRegistry;
use kurbo::Point;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Node(u32);

fn main() {
    let mut registry = StyleRegistry::new();
    let mut page = Page::new();

    let config = Config {
        trigger: Trigger::Click,
        ..Config::default()
    };
    let mut overlay = OverlayController::new(
        |node: &Node| format!("node #{}", node.0),
        config,
        &mut registry,
    );
    overlay.on_view_ready(&mut page).expect("view is ready");

    let a = Node(1);
    let b = Node(2);

    // Click A: activates.
    let tap_a = PointerInput::tap(Point::new(100.0, 100.0), Some(Target::new(a, "Rect")));
    overlay.handle_input(&mut page, &tap_a).unwrap();
    println!("tap A:     active={:?}", overlay.active_node());
    assert_eq!(overlay.active_node(), Some(a));
    let fixed_at = page.element(overlay.dom_id()).at;

    // Motion does not move a click-triggered overlay.
    let motion = PointerInput::raw_move(Point::new(400.0, 300.0));
    overlay.handle_input(&mut page, &motion).unwrap();
    assert_eq!(page.element(overlay.dom_id()).at, fixed_at);
    println!("motion:    position unchanged at ({}, {})", fixed_at.x, fixed_at.y);

    // Click A again: toggles off.
    overlay.handle_input(&mut page, &tap_a).unwrap();
    println!("tap A:     active={:?}", overlay.active_node());
    assert_eq!(overlay.active_node(), None);

    // Click B: activates for B.
    let tap_b = PointerInput::tap(Point::new(200.0, 150.0), Some(Target::new(b, "Ellipse")));
    overlay.handle_input(&mut page, &tap_b).unwrap();
    println!("tap B:     active={:?}", overlay.active_node());
    assert_eq!(overlay.active_node(), Some(b));
    assert_eq!(page.element(overlay.dom_id()).content, "node #2");
}
