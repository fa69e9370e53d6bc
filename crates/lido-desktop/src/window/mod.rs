//! Widget management module
//!
//! Provides the widget record, its startup configuration, the z-order
//! counter and the window manager that ties them together.

mod config;
mod manager;
mod stack;
mod widget;

pub use config::WidgetConfig;
pub use manager::WindowManager;
pub use stack::ZOrderStack;
pub use widget::{Placement, Widget};

/// Stable widget handle (the element id in the page, e.g. `window-tv`)
pub type WidgetId = String;
