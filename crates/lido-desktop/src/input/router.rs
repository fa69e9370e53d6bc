//! Drag session holder

use crate::math::Vec2;
use crate::window::WidgetId;
use super::DragSession;

/// Owns the drag session, if any
#[derive(Debug, Default)]
pub struct InputRouter {
    drag: Option<DragSession>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Current drag session
    #[inline]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start a drag, replacing any session left over from a lost pointer-up
    pub fn start_drag(&mut self, widget: WidgetId, grab_offset: Vec2, pointer_id: i32) {
        self.drag = Some(DragSession {
            widget,
            grab_offset,
            pointer_id,
        });
    }

    /// End the current drag, returning the session that was running
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.drag.take()
    }
}
