//! Rectangle primitive with on-demand area computation.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Both sides are public and freely mutable; [`Rectangle::area`] computes
/// from the current sides at call time and never caches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rectangle {
    /// Creates a rectangle from its two side lengths.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The product of the current sides.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}
