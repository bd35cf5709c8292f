// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration: trigger mode, offset, and the admission filter.

use alloc::string::String;

use kurbo::Vec2;

use crate::filter::NodeFilter;

/// What drives overlay activation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Trigger {
    /// Continuous pointer motion shows and tracks the overlay.
    #[default]
    Hover,
    /// Discrete clicks toggle the overlay; its position is fixed at
    /// activation time.
    Click,
}

/// Offset from the pointer to the overlay's near corner, in pixels.
///
/// Normalized at the boundary: a scalar applies to both axes, a pair or
/// vector applies per axis. The default is `(6, 6)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Offset(Vec2);

impl Offset {
    /// The per-axis offset vector.
    pub const fn to_vec2(self) -> Vec2 {
        self.0
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self(Vec2::new(6.0, 6.0))
    }
}

impl From<f64> for Offset {
    fn from(uniform: f64) -> Self {
        Self(Vec2::new(uniform, uniform))
    }
}

impl From<(f64, f64)> for Offset {
    fn from((x, y): (f64, f64)) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl From<[f64; 2]> for Offset {
    fn from([x, y]: [f64; 2]) -> Self {
        Self(Vec2::new(x, y))
    }
}

impl From<Vec2> for Offset {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

/// Per-controller configuration.
///
/// Immutable after construction, with one exception: the trigger mode,
/// which changes only through
/// [`OverlayController::set_trigger`](crate::controller::OverlayController::set_trigger).
pub struct Config<K> {
    /// Custom class for the overlay element. When set, the shared
    /// default-family rule is bypassed and this class is applied instead.
    pub class_name: Option<String>,
    /// Initial trigger mode.
    pub trigger: Trigger,
    /// Pointer-to-overlay offset.
    pub offset: Offset,
    /// Admission filter run against every targeted input.
    pub filter: NodeFilter<K>,
}

impl<K> Default for Config<K> {
    fn default() -> Self {
        Self {
            class_name: None,
            trigger: Trigger::default(),
            offset: Offset::default(),
            filter: NodeFilter::new(),
        }
    }
}

impl<K> core::fmt::Debug for Config<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("class_name", &self.class_name)
            .field("trigger", &self.trigger)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_defaults_to_six_six() {
        assert_eq!(Offset::default().to_vec2(), Vec2::new(6.0, 6.0));
    }

    #[test]
    fn offset_normalization() {
        assert_eq!(Offset::from(4.0).to_vec2(), Vec2::new(4.0, 4.0));
        assert_eq!(Offset::from((1.0, 2.0)).to_vec2(), Vec2::new(1.0, 2.0));
        assert_eq!(Offset::from([3.0, 5.0]).to_vec2(), Vec2::new(3.0, 5.0));
        assert_eq!(
            Offset::from(Vec2::new(7.0, 8.0)).to_vec2(),
            Vec2::new(7.0, 8.0)
        );
    }
}
