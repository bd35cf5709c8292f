// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_style --heading-base-level=0

//! Canopy Style: a scoped style-rule registry for overlay families.
//!
//! Canopy Style owns the stylesheets that overlay instances share and the
//! per-instance rules layered on top of them.
//!
//! - One [`StyleRegistry`] per page; controllers receive it by reference.
//! - [`StyleRegistry::ensure_sheet`] is a lookup-or-create keyed by the
//!   family marker, so the default-family sheet exists at most once no
//!   matter how many instances are constructed.
//! - Per-instance rules are scoped with a compound selector
//!   `<selector>[data-canopy-id="<instance>"]` so they only match the
//!   element carrying that instance's identity attribute.
//! - Rule identity is the compound selector text, compared by exact string
//!   equality. The attribute value is always double-quoted; creation,
//!   lookup, and removal share one composition path ([`scoped_selector`])
//!   so rules stay findable.
//!
//! # Example
//!
//! ```rust
//! use canopy_style::{Declarations, StyleRegistry, StyleRule};
//!
//! let mut registry = StyleRegistry::new();
//!
//! // First instance creates the family sheet; later instances reuse it.
//! let sheet = registry.ensure_sheet("canopy-overlay", || {
//!     vec![StyleRule::new(
//!         ".canopy-overlay",
//!         Declarations::new()
//!             .with("position", "absolute")
//!             .with("display", "none"),
//!     )]
//! });
//!
//! // A rule scoped to one instance.
//! registry.create_rule(
//!     sheet,
//!     ".canopy-overlay",
//!     Declarations::new().with("backgroundColor", "#333"),
//!     "canopy-overlay--0",
//! );
//! assert_eq!(
//!     registry.find_rule(sheet, ".canopy-overlay", "canopy-overlay--0"),
//!     Some(0)
//! );
//!
//! // Removal is exact-match and idempotent.
//! assert!(registry.remove_rule(sheet, ".canopy-overlay", "canopy-overlay--0"));
//! assert!(!registry.remove_rule(sheet, ".canopy-overlay", "canopy-overlay--0"));
//! ```
//!
//! ## Degraded environments
//!
//! Hosts without a structured rule API can register the family sheet with
//! [`StyleRegistry::ensure_text_sheet`]; rule creation then appends
//! serialized text instead of failing, and lookups report a benign miss.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod registry;
pub mod rule;
pub mod sheet;

pub use registry::{InstanceId, SheetId, StyleRegistry};
pub use rule::{Declarations, IDENTITY_ATTR, RuleBody, StyleRule, scoped_selector};
pub use sheet::Sheet;
