//! Widget declaration read at startup

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};

/// Declaration of one widget
///
/// Widgets are declared once at startup; none are created or destroyed at
/// runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Element id of the widget
    pub id: String,
    /// Title bar text
    pub title: String,
    /// Initial top-left corner
    pub position: Vec2,
    /// Rendered size, used for drag clamping
    pub size: Size,
    /// Start hidden (opened later from the dock)
    pub hidden: bool,
    /// Whether the widget has a drag handle; widgets without one are
    /// neither dragged nor focused by pointer presses
    pub drag_handle: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            position: Vec2::new(24.0, 84.0),
            size: Size::new(360.0, 240.0),
            hidden: false,
            drag_handle: true,
        }
    }
}

impl WidgetConfig {
    /// Shorthand for a visible, draggable widget
    pub fn new(id: &str, title: &str, position: Vec2, size: Size) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            position,
            size,
            ..Default::default()
        }
    }
}
