//! Desk configuration
//!
//! Everything the page declares up front: widgets, dock bindings, the
//! channel lineup and layout constants. Every field has a default matching
//! the stock page, so `{}` is a valid document.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::channel::{default_lineup, Channel};
use crate::dock::{TriggerAction, TriggerConfig};
use crate::error::ConfigError;
use crate::math::{Size, Vec2};
use crate::persistence::INVITES_KEY;
use crate::transition::STATIC_DURATION_MS;
use crate::viewport::DragBounds;
use crate::window::WidgetConfig;

/// Widget focused at startup unless configured otherwise
pub const DEFAULT_PRIMARY_WIDGET: &str = "window-tv";

/// Full startup configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeskConfig {
    pub widgets: Vec<WidgetConfig>,
    /// Widget activated at startup; `None` leaves nothing active
    pub primary_widget: Option<String>,
    pub triggers: Vec<TriggerConfig>,
    pub channels: Vec<Channel>,
    pub drag_bounds: DragBounds,
    /// Static clip duration per channel switch
    pub transition_ms: u32,
    /// Key of the persisted invite list
    pub storage_key: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            widgets: vec![
                WidgetConfig::new("window-tv", "Lido TV", Vec2::new(32.0, 96.0), Size::new(480.0, 360.0)),
                WidgetConfig::new("window-notes", "Beach Notes", Vec2::new(560.0, 120.0), Size::new(320.0, 260.0)),
                WidgetConfig {
                    hidden: true,
                    ..WidgetConfig::new(
                        "window-guestbook",
                        "Guestbook",
                        Vec2::new(420.0, 220.0),
                        Size::new(360.0, 300.0),
                    )
                },
            ],
            primary_widget: Some(DEFAULT_PRIMARY_WIDGET.to_string()),
            triggers: vec![
                TriggerConfig::new("dock-tv", TriggerAction::Open, Some("window-tv")),
                TriggerConfig::new("dock-notes", TriggerAction::Open, Some("window-notes")),
                TriggerConfig::new("dock-guestbook", TriggerAction::Open, Some("window-guestbook")),
                TriggerConfig::new("close-tv", TriggerAction::Close, Some("window-tv")),
                TriggerConfig::new("close-notes", TriggerAction::Close, Some("window-notes")),
                TriggerConfig::new("close-guestbook", TriggerAction::Close, Some("window-guestbook")),
                TriggerConfig::new("next-channel", TriggerAction::NextChannel, None),
                TriggerConfig::new("prev-channel", TriggerAction::PrevChannel, None),
                TriggerConfig::new("auth-open", TriggerAction::OpenPanel, None),
                TriggerConfig::new("auth-close", TriggerAction::ClosePanel, None),
                TriggerConfig::new("tab-invite", TriggerAction::SelectTab, Some("invite")),
                TriggerConfig::new("tab-login", TriggerAction::SelectTab, Some("login")),
            ],
            channels: default_lineup(),
            drag_bounds: DragBounds::default(),
            transition_ms: STATIC_DURATION_MS,
            storage_key: INVITES_KEY.to_string(),
        }
    }
}

impl DeskConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DeskConfig = serde_json::from_str(json)?;
        config.validate()?;
        info!(
            widgets = config.widgets.len(),
            channels = config.channels.len(),
            "desk config loaded"
        );
        Ok(config)
    }

    /// Check structural rules that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, widget) in self.widgets.iter().enumerate() {
            if widget.id.trim().is_empty() {
                return Err(ConfigError::MissingWidgetId(index));
            }
            if !seen.insert(widget.id.as_str()) {
                return Err(ConfigError::DuplicateWidget(widget.id.clone()));
            }
        }

        if self.channels.is_empty() {
            return Err(ConfigError::EmptyLineup);
        }

        if let Some(primary) = &self.primary_widget {
            if !seen.contains(primary.as_str()) {
                return Err(ConfigError::UnknownPrimary(primary.clone()));
            }
        }

        Ok(())
    }
}
