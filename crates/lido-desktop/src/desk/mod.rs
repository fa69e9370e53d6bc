//! Desk coordinating all components
//!
//! This module is split into focused submodules:
//! - `controls`: Dock control dispatch
//! - `media`: Channel switching and transition completion
//! - `forms`: Invite and login submission
//! - `view`: Serializable render state for the host

mod controls;
mod forms;
mod media;
mod view;

use tracing::info;
use crate::channel::{ChannelPlayer, MediaAction};
use crate::config::DeskConfig;
use crate::dock::DockLauncher;
use crate::error::ConfigError;
use crate::input::{CommandOutcome, DeskCommand};
use crate::panel::AuthPanel;
use crate::persistence::{InviteStore, KeyValueStore};
use crate::viewport::ViewportBounds;
use crate::window::{WidgetId, WindowManager};

pub use controls::PressOutcome;
pub use view::DeskView;

/// Desk coordinating all components
///
/// The single owner of page state. Host callbacks receive it by reference
/// and translate DOM events into calls on it:
/// - Window manager (activation, open/close, drag)
/// - Dock launcher (control id to action table)
/// - Channel player (lineup and static transitions)
/// - Auth panel and the persisted invite list
pub struct Desk<S> {
    /// Window manager
    pub windows: WindowManager,
    /// Dock launcher
    pub dock: DockLauncher,
    /// Channel player
    pub player: ChannelPlayer,
    /// Auth/invite modal
    pub panel: AuthPanel,
    /// Persisted invite list
    pub(crate) invites: InviteStore<S>,
    primary: Option<WidgetId>,
}

impl<S: KeyValueStore> Desk<S> {
    /// Build a desk from a validated configuration
    pub fn from_config(
        config: DeskConfig,
        viewport: Box<dyn ViewportBounds>,
        store: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let windows = WindowManager::new(config.widgets, viewport, config.drag_bounds);
        let dock = DockLauncher::from_configs(config.triggers, &windows);
        let player = ChannelPlayer::with_delay(config.channels, config.transition_ms);
        let invites = InviteStore::with_key(store, &config.storage_key);

        info!(
            widgets = windows.count(),
            controls = dock.len(),
            channels = player.channels().len(),
            "desk created"
        );

        Ok(Self {
            windows,
            dock,
            player,
            panel: AuthPanel::new(),
            invites,
            primary: config.primary_widget,
        })
    }

    /// Page-load sequence: focus the primary widget and tune the first
    /// channel
    pub fn init(&mut self, now_ms: f64) -> Option<MediaAction> {
        if let Some(primary) = self.primary.clone() {
            self.windows.activate(&primary);
        }
        self.player.start(now_ms)
    }

    /// Route a window command
    #[inline]
    pub fn apply(&mut self, command: DeskCommand) -> CommandOutcome {
        self.windows.apply(command)
    }

    /// Persisted invite list
    pub fn invites(&self) -> &InviteStore<S> {
        &self.invites
    }
}
