//! Dock control dispatch

use serde::Serialize;
use tracing::debug;
use crate::channel::MediaAction;
use crate::dock::Trigger;
use crate::input::CommandOutcome;
use crate::persistence::KeyValueStore;
use super::Desk;

/// Result of pressing a page control
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "camelCase")]
pub enum PressOutcome {
    /// Window open/close
    Window(CommandOutcome),
    /// Channel switch; the host runs the media action
    Media(Option<MediaAction>),
    /// Panel visibility or tab changed
    Panel,
    /// No control with that id is wired
    Unbound,
}

impl<S: KeyValueStore> Desk<S> {
    /// Execute the trigger bound to a control
    pub fn press(&mut self, control: &str, now_ms: f64) -> PressOutcome {
        let Some(trigger) = self.dock.dispatch(control).cloned() else {
            debug!(control, "press on unbound control");
            return PressOutcome::Unbound;
        };
        debug!(control, ?trigger, "control pressed");

        match trigger {
            Trigger::Open(widget) => PressOutcome::Window(self.windows.open(&widget)),
            Trigger::Close(widget) => PressOutcome::Window(self.windows.close(&widget)),
            Trigger::SelectTab(name) => {
                self.panel.select_tab(&name);
                PressOutcome::Panel
            }
            Trigger::OpenPanel => {
                self.panel.open();
                PressOutcome::Panel
            }
            Trigger::ClosePanel => {
                self.panel.close();
                PressOutcome::Panel
            }
            Trigger::NextChannel => PressOutcome::Media(self.next_channel(now_ms)),
            Trigger::PrevChannel => PressOutcome::Media(self.prev_channel(now_ms)),
        }
    }
}
