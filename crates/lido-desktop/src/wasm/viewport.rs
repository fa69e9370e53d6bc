//! Live browser viewport

use crate::math::Size;
use crate::viewport::{Viewport, ViewportBounds};

/// Reads `window.innerWidth` / `innerHeight` on every query
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport {
    /// Used when the window object is not reachable
    fallback: Viewport,
}

impl BrowserViewport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewportBounds for BrowserViewport {
    fn viewport_size(&self) -> Size {
        let Some(window) = web_sys::window() else {
            return self.fallback.viewport_size();
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64());
        let height = window.inner_height().ok().and_then(|v| v.as_f64());
        match (width, height) {
            (Some(width), Some(height)) => Size::new(width as f32, height as f32),
            _ => self.fallback.viewport_size(),
        }
    }
}
