//! Drag session state

use crate::math::Vec2;
use crate::window::WidgetId;

/// State of one in-progress pointer drag
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Widget being moved
    pub widget: WidgetId,
    /// Pointer position minus widget origin at drag start
    pub grab_offset: Vec2,
    /// Pointer captured by the drag handle
    pub pointer_id: i32,
}

impl DragSession {
    /// Top-left corner that keeps the grab point under `pointer`
    #[inline]
    pub fn candidate(&self, pointer: Vec2) -> Vec2 {
        pointer - self.grab_offset
    }
}
