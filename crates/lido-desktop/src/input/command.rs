//! Window manager command set

use serde::Deserialize;
use crate::math::{Rect, Size, Vec2};
use crate::window::WidgetId;

/// Pointer button, numbered like `PointerEvent.button`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "i16")]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(i16),
}

impl From<i16> for PointerButton {
    fn from(button: i16) -> Self {
        match button {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// Command consumed by [`crate::WindowManager::apply`]
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DeskCommand {
    /// Bring a widget to the front (pointer-down on its body)
    Activate { widget: WidgetId },
    /// Pointer-down on a widget's drag handle
    #[serde(rename_all = "camelCase")]
    BeginDrag {
        widget: WidgetId,
        pointer: Vec2,
        button: PointerButton,
        pointer_id: i32,
        /// Bounding client rect of the widget at press time
        #[serde(default)]
        rect: Option<Rect>,
    },
    /// Pointer moved while a drag may be in progress
    DragMove {
        pointer: Vec2,
        /// Current offset width/height of the dragged widget
        #[serde(default)]
        size: Option<Size>,
    },
    /// Pointer released
    EndDrag,
    /// Close button inside a widget
    Close { widget: WidgetId },
    /// Dock launcher request
    Open { widget: WidgetId },
}

impl DeskCommand {
    /// Widget targeted by the command, if it names one
    pub fn widget(&self) -> Option<&str> {
        match self {
            DeskCommand::Activate { widget }
            | DeskCommand::BeginDrag { widget, .. }
            | DeskCommand::Close { widget }
            | DeskCommand::Open { widget } => Some(widget),
            DeskCommand::DragMove { .. } | DeskCommand::EndDrag => None,
        }
    }
}
