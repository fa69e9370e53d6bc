//! Command outcome type

use serde::Serialize;
use crate::math::Vec2;
use crate::window::WidgetId;

/// What a command did, for the host to mirror into the page
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CommandOutcome {
    /// Widget raised to the front
    #[serde(rename_all = "camelCase")]
    Activated { widget: WidgetId, z_order: u32 },
    /// Drag started; the host should capture `pointer_id` on the handle
    #[serde(rename_all = "camelCase")]
    DragStarted { widget: WidgetId, pointer_id: i32 },
    /// Widget moved to a clamped position
    Moved { widget: WidgetId, position: Vec2 },
    /// Drag ended; the host should release `pointer_id`
    #[serde(rename_all = "camelCase")]
    DragEnded { pointer_id: i32 },
    /// Widget hidden
    Closed { widget: WidgetId },
    /// Command named a widget that is not declared
    MissingTarget { widget: WidgetId },
    /// Command had nothing to act on
    Ignored,
}

impl CommandOutcome {
    /// Whether the page needs re-rendering
    #[inline]
    pub fn changed(&self) -> bool {
        !matches!(
            self,
            CommandOutcome::MissingTarget { .. } | CommandOutcome::Ignored
        )
    }
}
