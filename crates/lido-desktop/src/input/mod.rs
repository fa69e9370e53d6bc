//! Input commands and drag state
//!
//! Host events (pointer, dock clicks) are translated into [`DeskCommand`]s
//! before they reach the window manager, so the manager never sees DOM
//! events directly.

mod command;
mod drag;
mod result;
mod router;

pub use command::{DeskCommand, PointerButton};
pub use drag::DragSession;
pub use result::CommandOutcome;
pub use router::InputRouter;
