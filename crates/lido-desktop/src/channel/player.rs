//! Channel player with token-guarded static transitions

use serde::Serialize;
use tracing::{debug, info};
use crate::transition::{StaticCut, TokenIssuer, TransitionPhase, TransitionToken, STATIC_DURATION_MS};
use super::Channel;

/// Media work the host must perform on the two video elements
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MediaAction {
    /// Rewind and play the static clip, show it, hide and pause the main clip.
    /// The host schedules `complete(token)` after `delay_ms`.
    #[serde(rename_all = "camelCase")]
    ShowStatic {
        token: TransitionToken,
        delay_ms: u32,
    },
    /// Load a new source into the main clip, play it, drop the static
    Load { src: String },
    /// Rewind the already-loaded main clip, play it, drop the static
    Restart,
}

/// Render state of the player
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub label: String,
    pub title: String,
    pub filter: String,
    pub static_visible: bool,
    pub main_hidden: bool,
    /// Source currently loaded into the main clip
    pub loaded_src: Option<String>,
}

/// Cycles a fixed lineup of channels
pub struct ChannelPlayer {
    channels: Vec<Channel>,
    current: usize,
    loaded_src: Option<String>,
    pending: Option<StaticCut>,
    tokens: TokenIssuer,
    delay_ms: u32,
}

impl ChannelPlayer {
    /// Create a player tuned to the first channel
    ///
    /// `channels` must not be empty; [`crate::DeskConfig`] validation
    /// guarantees that for configured players.
    pub fn new(channels: Vec<Channel>) -> Self {
        Self::with_delay(channels, STATIC_DURATION_MS)
    }

    /// Create a player with a custom static duration
    pub fn with_delay(channels: Vec<Channel>, delay_ms: u32) -> Self {
        Self {
            channels,
            current: 0,
            loaded_src: None,
            pending: None,
            tokens: TokenIssuer::new(),
            delay_ms,
        }
    }

    /// Lineup index currently tuned
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Channel currently tuned
    pub fn current(&self) -> Option<&Channel> {
        self.channels.get(self.current)
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Current phase of the media layers
    pub fn phase(&self) -> TransitionPhase {
        if self.pending.is_some() {
            TransitionPhase::Static
        } else {
            TransitionPhase::Idle
        }
    }

    /// Play the current channel on page load
    pub fn start(&mut self, now_ms: f64) -> Option<MediaAction> {
        info!(channel = self.current, "starting channel player");
        self.tune(self.current, now_ms)
    }

    /// Step through the lineup by `direction`, wrapping at both ends
    pub fn switch(&mut self, direction: i32, now_ms: f64) -> Option<MediaAction> {
        let len = self.channels.len() as i64;
        if len == 0 {
            return None;
        }
        let next = (self.current as i64 + direction as i64).rem_euclid(len) as usize;
        self.tune(next, now_ms)
    }

    fn tune(&mut self, index: usize, now_ms: f64) -> Option<MediaAction> {
        if index >= self.channels.len() {
            return None;
        }
        self.current = index;

        let token = self.tokens.issue();
        if let Some(prev) = self.pending.replace(StaticCut::new(token, now_ms, index, self.delay_ms)) {
            debug!(stale = prev.token.0, token = token.0, "superseding in-flight transition");
        }

        Some(MediaAction::ShowStatic {
            token,
            delay_ms: self.delay_ms,
        })
    }

    /// Finish the transition identified by `token`
    ///
    /// Returns `None` for a token that was superseded by a later switch or
    /// already completed.
    pub fn complete(&mut self, token: TransitionToken) -> Option<MediaAction> {
        match &self.pending {
            Some(cut) if cut.token == token => {}
            _ => {
                debug!(token = token.0, "ignoring stale transition");
                return None;
            }
        }
        let cut = self.pending.take()?;
        let channel = self.channels.get(cut.target)?;

        if self.loaded_src.as_deref() == Some(channel.src.as_str()) {
            Some(MediaAction::Restart)
        } else {
            self.loaded_src = Some(channel.src.clone());
            Some(MediaAction::Load {
                src: channel.src.clone(),
            })
        }
    }

    /// Complete the pending transition once its delay has elapsed
    pub fn tick(&mut self, now_ms: f64) -> Option<MediaAction> {
        let token = match &self.pending {
            Some(cut) if cut.is_complete(now_ms) => cut.token,
            _ => return None,
        };
        self.complete(token)
    }

    /// Render state
    pub fn view(&self) -> PlayerView {
        let channel = self.current();
        let transitioning = self.pending.is_some();
        PlayerView {
            label: channel.map(|c| c.name.clone()).unwrap_or_default(),
            title: channel.map(|c| c.title.clone()).unwrap_or_default(),
            filter: channel.map(|c| c.filter.clone()).unwrap_or_default(),
            static_visible: transitioning,
            main_hidden: transitioning,
            loaded_src: self.loaded_src.clone(),
        }
    }
}
