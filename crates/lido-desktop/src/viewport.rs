//! Viewport bounds tracking and drag clamping
//!
//! The window manager never caches the viewport size: every drag move asks
//! a [`ViewportBounds`] source for the current dimensions, so a browser
//! resize mid-drag is honored on the next pointer move.

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};

/// Source of the current viewport dimensions
pub trait ViewportBounds {
    /// Current viewport size in pixels
    fn viewport_size(&self) -> Size;
}

/// Viewport with a fixed, explicitly updated size
///
/// Used natively and in tests; the browser build reads the window instead.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    /// Screen size in pixels
    pub screen_size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            screen_size: Size::new(1920.0, 1080.0),
        }
    }
}

impl Viewport {
    /// Create a viewport of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            screen_size: Size::new(width, height),
        }
    }

    /// Update the size after a resize
    #[inline]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_size = Size::new(width, height);
    }
}

impl ViewportBounds for Viewport {
    #[inline]
    fn viewport_size(&self) -> Size {
        self.screen_size
    }
}

/// Margins a dragged widget must keep from the viewport edges
///
/// The top margin sits below the fixed header strip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragBounds {
    pub left: f32,
    pub top: f32,
    pub header: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for DragBounds {
    fn default() -> Self {
        Self {
            left: 8.0,
            top: 8.0,
            header: 60.0,
            right: 12.0,
            bottom: 12.0,
        }
    }
}

impl DragBounds {
    /// Smallest allowed top-left corner
    #[inline]
    pub fn min_corner(&self) -> Vec2 {
        Vec2::new(self.left, self.top + self.header)
    }

    /// Largest allowed top-left corner for a widget of `size` in `viewport`
    ///
    /// May be smaller than [`DragBounds::min_corner`] when the widget does
    /// not fit; [`DragBounds::clamp`] resolves that in favor of the minimum.
    #[inline]
    pub fn max_corner(&self, viewport: Size, size: Size) -> Vec2 {
        Vec2::new(
            viewport.width - size.width - self.right,
            viewport.height - size.height - self.bottom,
        )
    }

    /// Clamp a candidate top-left corner into the allowed range
    pub fn clamp(&self, candidate: Vec2, viewport: Size, size: Size) -> Vec2 {
        candidate.clamp_floor(self.min_corner(), self.max_corner(viewport, size))
    }
}
