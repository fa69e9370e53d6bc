//! Dock launcher: page controls mapped to desk actions
//!
//! Triggers come from declarative attributes on the page (`data-open`,
//! close buttons inside widgets, `data-tab`). The launcher only records the
//! mapping; the [`crate::Desk`] executes the resolved trigger.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::window::WindowManager;

/// Action bound to a page control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Open and focus a widget by id
    Open(String),
    /// Close the widget that contains the control
    Close(String),
    /// Select a tab of the auth panel by name
    SelectTab(String),
    /// Show the auth panel
    OpenPanel,
    /// Hide the auth panel
    ClosePanel,
    /// Next channel on the TV
    NextChannel,
    /// Previous channel on the TV
    PrevChannel,
}

/// Action names as written in the config
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerAction {
    Open,
    Close,
    SelectTab,
    OpenPanel,
    ClosePanel,
    NextChannel,
    PrevChannel,
}

/// Declaration of one control binding
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Control element id
    pub control: String,
    pub action: TriggerAction,
    /// Widget id or tab name, for the actions that take one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl TriggerConfig {
    pub fn new(control: &str, action: TriggerAction, target: Option<&str>) -> Self {
        Self {
            control: control.to_string(),
            action,
            target: target.map(str::to_string),
        }
    }

    /// Resolve into a trigger; `None` when a required target is missing
    pub fn trigger(&self) -> Option<Trigger> {
        let target = || self.target.clone();
        Some(match self.action {
            TriggerAction::Open => Trigger::Open(target()?),
            TriggerAction::Close => Trigger::Close(target()?),
            TriggerAction::SelectTab => Trigger::SelectTab(target()?),
            TriggerAction::OpenPanel => Trigger::OpenPanel,
            TriggerAction::ClosePanel => Trigger::ClosePanel,
            TriggerAction::NextChannel => Trigger::NextChannel,
            TriggerAction::PrevChannel => Trigger::PrevChannel,
        })
    }
}

/// Control id to trigger table
#[derive(Debug, Default)]
pub struct DockLauncher {
    bindings: HashMap<String, Trigger>,
}

impl DockLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind declared controls, skipping widget triggers whose target is
    /// not declared
    pub fn from_configs(configs: Vec<TriggerConfig>, windows: &WindowManager) -> Self {
        let mut launcher = Self::new();
        for config in configs {
            launcher.bind(config, windows);
        }
        launcher
    }

    /// Bind one control; returns whether it was wired
    pub fn bind(&mut self, config: TriggerConfig, windows: &WindowManager) -> bool {
        let Some(trigger) = config.trigger() else {
            warn!(control = %config.control, action = ?config.action, "control has no target; not wiring");
            return false;
        };
        if let Trigger::Open(widget) | Trigger::Close(widget) = &trigger {
            if windows.get(widget).is_none() {
                warn!(control = %config.control, widget = %widget, "control targets undeclared widget; not wiring");
                return false;
            }
        }
        self.bindings.insert(config.control, trigger);
        true
    }

    /// Trigger bound to a control
    pub fn dispatch(&self, control: &str) -> Option<&Trigger> {
        self.bindings.get(control)
    }

    /// Number of wired controls
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
