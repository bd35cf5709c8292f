// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped styling: two controllers share one family sheet, and each
//! instance's rules stay invisible to the other.
//!
//! Run:
//! - `cargo run -p canopy_demos --example scoped_rules`

use canopy_demos::Page;
use canopy_overlay::{Config, FAMILY_CLASS, OverlayController};
use canopy_style::{Declarations, StyleRegistry};

fn main() {
    let mut registry = StyleRegistry::new();
    let mut page = Page::new();

    let content = |node: &u32| format!("node #{node}");
    let mut first: OverlayController<u32, _> =
        OverlayController::new(content, Config::default(), &mut registry);
    let mut second: OverlayController<u32, _> =
        OverlayController::new(content, Config::default(), &mut registry);

    // Both controllers reuse one family sheet.
    println!("family sheets: {}", registry.sheet_count(FAMILY_CLASS));
    assert_eq!(registry.sheet_count(FAMILY_CLASS), 1);

    // A dark theme for the first instance only.
    first.create_style_rule(
        &mut registry,
        &format!(".{FAMILY_CLASS}"),
        Declarations::new()
            .with("backgroundColor", "#333")
            .with("color", "#eee"),
    );
    let selector = format!(".{FAMILY_CLASS}");
    println!(
        "first sees its rule at {:?}, second sees {:?}",
        first.find_style_rule(&registry, &selector),
        second.find_style_rule(&registry, &selector),
    );
    assert!(first.find_style_rule(&registry, &selector).is_some());
    assert_eq!(second.find_style_rule(&registry, &selector), None);

    // Classes mutate only the owning element.
    first.add_class(&mut page, "fancy");
    assert!(
        page.element(first.dom_id())
            .classes
            .contains(&"fancy".to_string())
    );

    // Removal is exact-match and idempotent.
    assert!(first.remove_style_rule(&mut registry, &selector));
    assert!(!first.remove_style_rule(&mut registry, &selector));

    let sheet = registry.ensure_sheet(FAMILY_CLASS, Vec::new);
    println!("sheet text:\n{}", registry.sheet(sheet).unwrap().css_text());
    second.destroy(&mut page);
}
