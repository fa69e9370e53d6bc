//! Z-order counter

/// Hands out strictly increasing stacking priorities
///
/// Values are never reused or decremented for the lifetime of the stack.
#[derive(Clone, Debug)]
pub struct ZOrderStack {
    cursor: u32,
}

impl ZOrderStack {
    /// Headroom above the widget count so raised widgets clear the page's
    /// own stacked elements
    pub const BASE_OFFSET: u32 = 5;

    /// Create a stack for `widget_count` declared widgets
    pub fn new(widget_count: usize) -> Self {
        Self {
            cursor: widget_count as u32 + Self::BASE_OFFSET,
        }
    }

    /// Take the next priority
    #[inline]
    pub fn raise(&mut self) -> u32 {
        self.cursor += 1;
        self.cursor
    }

    /// Highest priority handed out so far (or the base if none)
    #[inline]
    pub fn top(&self) -> u32 {
        self.cursor
    }
}
