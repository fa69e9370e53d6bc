//! Widget record

use serde::Serialize;
use crate::math::{Rect, Size, Vec2};
use super::{WidgetConfig, WidgetId};

/// How the host should position the widget element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Stylesheet placement is still in effect
    #[default]
    Anchored,
    /// Explicit left/top; right/bottom are reset to `auto`
    Absolute,
}

/// A draggable, closable, focusable panel
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: WidgetId,
    pub title: String,
    /// Top-left corner relative to the viewport
    pub position: Vec2,
    pub size: Size,
    pub visible: bool,
    pub active: bool,
    /// Stacking priority, higher is in front
    pub z_order: u32,
    /// Widgets without a handle ignore pointer input entirely; only the
    /// dock can open and focus them
    pub drag_handle: bool,
    pub placement: Placement,
}

impl Widget {
    /// Build a widget from its declaration
    pub fn from_config(config: WidgetConfig, z_order: u32) -> Self {
        Self {
            id: config.id,
            title: config.title,
            position: config.position,
            size: config.size,
            visible: !config.hidden,
            active: false,
            z_order,
            drag_handle: config.drag_handle,
            placement: Placement::Anchored,
        }
    }

    /// Bounding rectangle in viewport pixels
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Active and on screen
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.active && self.visible
    }
}
