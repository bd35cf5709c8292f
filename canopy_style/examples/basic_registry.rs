// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Canopy Style: ensure a family sheet, scope rules to
//! instances, and remove them again.

use canopy_style::{Declarations, StyleRegistry, StyleRule};

fn main() {
    let mut registry = StyleRegistry::new();

    let sheet = registry.ensure_sheet("canopy-overlay", || {
        vec![StyleRule::new(
            ".canopy-overlay",
            Declarations::new()
                .with("position", "absolute")
                .with("display", "none"),
        )]
    });

    let a = registry.allocate_id();
    let b = registry.allocate_id();
    println!("instances: {} and {}", a.get(), b.get());

    registry.create_rule(
        sheet,
        ".canopy-overlay",
        Declarations::new().with("backgroundColor", "#333"),
        "canopy-overlay--0",
    );
    println!(
        "rule for instance 0 at index {:?}",
        registry.find_rule(sheet, ".canopy-overlay", "canopy-overlay--0")
    );
    println!(
        "sheet text:\n{}",
        registry.sheet(sheet).unwrap().css_text()
    );

    registry.remove_rule(sheet, ".canopy-overlay", "canopy-overlay--0");
    println!(
        "after removal: {:?}",
        registry.find_rule(sheet, ".canopy-overlay", "canopy-overlay--0")
    );
}
