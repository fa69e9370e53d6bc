//! Lido desk: a themed browser desktop
//!
//! This crate provides the state behind the page:
//! - Widget management (activation, open/close, z-order, drag clamping)
//! - A dock of controls bound to desk actions
//! - A simulated TV with static transitions between channels
//! - An invite/login modal backed by a key-value store
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Widgets, the z-order counter and the window manager
//! - [`input`]: Commands, drag sessions and outcomes
//! - [`transition`]: Static cuts and cancellation tokens
//! - [`channel`]: Channel lineup and player
//! - [`panel`]: Invite and login forms
//! - [`persistence`]: Key-value store and the invite list
//!
//! ## Example
//!
//! ```rust
//! use lido_desktop::{Desk, DeskConfig, MemoryStore, Viewport};
//!
//! let mut desk = Desk::from_config(
//!     DeskConfig::default(),
//!     Box::new(Viewport::new(1280.0, 800.0)),
//!     MemoryStore::new(),
//! )
//! .unwrap();
//! desk.init(0.0);
//! desk.press("dock-guestbook", 16.0);
//! assert_eq!(desk.view().focused.as_deref(), Some("window-guestbook"));
//! ```
//!
//! Time never comes from a clock inside the core: callers pass `now_ms`.

pub mod channel;
pub mod input;
pub mod math;
pub mod panel;
pub mod persistence;
pub mod transition;
pub mod window;

mod config;
mod desk;
mod dock;
mod error;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use channel::{Channel, ChannelPlayer, MediaAction, PlayerView};
pub use config::{DeskConfig, DEFAULT_PRIMARY_WIDGET};
pub use desk::{Desk, DeskView, PressOutcome};
pub use dock::{DockLauncher, Trigger, TriggerAction, TriggerConfig};
pub use error::{ConfigError, StoreError, StoreResult};
pub use input::{CommandOutcome, DeskCommand, PointerButton};
pub use math::{Rect, Size, Vec2};
pub use panel::{AuthPanel, InviteForm, LoginForm, PanelTab, StatusKind, StatusMessage};
pub use persistence::{InviteRecord, InviteStore, KeyValueStore, MemoryStore, INVITES_KEY};
pub use transition::{TransitionToken, STATIC_DURATION_MS};
pub use viewport::{DragBounds, Viewport, ViewportBounds};
pub use window::{Placement, Widget, WidgetConfig, WidgetId, WindowManager, ZOrderStack};
