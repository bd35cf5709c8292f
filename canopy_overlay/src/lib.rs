// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_overlay --heading-base-level=0

//! Canopy Overlay: a pointer-driven overlay controller for 2D scene graphs.
//!
//! ## Overview
//!
//! This crate keeps a positioned, styleable hint element synchronized with
//! pointer interaction over a scene graph. It does not perform hit testing
//! and it does not own a page: feed it normalized [`PointerInput`] records
//! (for example from your scene graph's event dispatch) and give it an
//! [`OverlaySurface`] to mutate, and it runs the show/hide/update state
//! machine, admission filtering, and viewport-aware placement.
//!
//! ## Inputs
//!
//! Scene-level events carry a [`Target`] (node handle, type tag, root
//! flag); raw view motion and leave events carry none. Both shapes are
//! normalized into [`PointerInput`] at the ingestion boundary, so the
//! filter and the position solver never branch on an event's source shape.
//!
//! ## Admission
//!
//! [`NodeFilter`] AND-combines four checks: a present, non-root target;
//! inclusion by type tag (empty set admits all); exclusion by type tag
//! (exclusion dominates); and an optional final `should_begin` predicate.
//!
//! ## Placement
//!
//! [`position::solve`] adds the configured offset to the pointer and flips
//! each axis independently when the measured overlay would run past the
//! visible edge. One flip attempt per axis; oversized overlays clip.
//!
//! ## Styling
//!
//! Controllers share one default-family sheet through
//! [`canopy_style::StyleRegistry`], constructed once per page and passed by
//! reference. Per-instance rules are scoped by the instance's identity
//! attribute and never leak across controllers.
//!
//! ## Trigger modes
//!
//! Hover tracks continuous motion and hides when the pointer leaves the
//! view; click toggles on discrete taps with a position fixed at
//! activation. Switching modes rebinds the subscription mask and forces
//! the idle state.
//!
//! ## Workflow
//!
//! 1) Construct a [`StyleRegistry`](canopy_style::StyleRegistry) for the
//!    page and an [`OverlayController`] per overlay instance.
//! 2) Forward the scene's view-ready event to
//!    [`OverlayController::on_view_ready`], then dispatch every pointer
//!    event through [`OverlayController::handle_input`]. Kinds outside the
//!    controller's current subscription mask are ignored, so dispatch can
//!    be unconditional.
//! 3) Tear down with [`OverlayController::destroy`]; the controller is
//!    consumed and the overlay element leaves the page with it.
//!
//! ## Example
//!
//! ```
//! use canopy_overlay::{
//!     Config, NodeFilter, OverlayController, PointerInput, Target, Trigger,
//! };
//! use canopy_style::StyleRegistry;
//! use kurbo::Point;
//! # use canopy_overlay::{OverlaySurface, ViewStatus, Viewport};
//! # use kurbo::{Size, Vec2};
//! # #[derive(Default)]
//! # struct Page;
//! # impl OverlaySurface for Page {
//! #     fn view_status(&self) -> ViewStatus { ViewStatus::Ready }
//! #     fn ensure_element(&mut self, _: &str) {}
//! #     fn set_content(&mut self, _: &str, _: &str) {}
//! #     fn set_class(&mut self, _: &str, _: &str) {}
//! #     fn add_class(&mut self, _: &str, _: &str) {}
//! #     fn remove_class(&mut self, _: &str, _: &str) {}
//! #     fn show(&mut self, _: &str) {}
//! #     fn hide(&mut self, _: &str) {}
//! #     fn place(&mut self, _: &str, _: Point) {}
//! #     fn measure(&self, _: &str) -> Size { Size::new(50.0, 20.0) }
//! #     fn viewport(&self) -> Viewport {
//! #         Viewport { size: Size::new(1000.0, 800.0), scroll: Vec2::ZERO }
//! #     }
//! #     fn detach(&mut self, _: &str) {}
//! # }
//!
//! let mut registry = StyleRegistry::new();
//! let mut page = Page::default();
//!
//! let config = Config {
//!     filter: NodeFilter::new().include_types(["Rect", "Ellipse"]),
//!     ..Config::default()
//! };
//! let mut overlay = OverlayController::new(
//!     |node: &u32| format!("node #{node}"),
//!     config,
//!     &mut registry,
//! );
//!
//! overlay.on_view_ready(&mut page)?;
//!
//! // Pointer over an eligible node: the overlay activates.
//! let input = PointerInput::scene_move(
//!     Point::new(120.0, 80.0),
//!     Some(Target::new(7, "Rect")),
//! );
//! overlay.handle_input(&mut page, &input)?;
//! assert_eq!(overlay.active_node(), Some(7));
//!
//! // Click mode instead: discrete taps toggle the overlay.
//! overlay.set_trigger(&mut page, Trigger::Click);
//! assert_eq!(overlay.active_node(), None);
//!
//! overlay.destroy(&mut page);
//! # Ok::<(), canopy_overlay::Error>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod event;
pub mod filter;
pub mod position;
pub mod surface;

pub use config::{Config, Offset, Trigger};
pub use controller::{Error, FAMILY_CLASS, OverlayController};
pub use event::{EventMask, InputKind, PointerInput, Target};
pub use filter::NodeFilter;
pub use position::Viewport;
pub use surface::{ContentSource, OverlaySurface, ViewStatus};
