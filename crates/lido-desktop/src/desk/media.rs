//! Channel switching

use crate::channel::MediaAction;
use crate::persistence::KeyValueStore;
use crate::transition::TransitionToken;
use super::Desk;

impl<S: KeyValueStore> Desk<S> {
    #[inline]
    pub fn next_channel(&mut self, now_ms: f64) -> Option<MediaAction> {
        self.player.switch(1, now_ms)
    }

    #[inline]
    pub fn prev_channel(&mut self, now_ms: f64) -> Option<MediaAction> {
        self.player.switch(-1, now_ms)
    }

    /// Host timer fired for `token`
    #[inline]
    pub fn complete_transition(&mut self, token: TransitionToken) -> Option<MediaAction> {
        self.player.complete(token)
    }

    /// Animation-frame poll; completes a due transition
    #[inline]
    pub fn tick(&mut self, now_ms: f64) -> Option<MediaAction> {
        self.player.tick(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeskConfig;
    use crate::persistence::MemoryStore;
    use crate::viewport::Viewport;

    fn desk() -> Desk<MemoryStore> {
        Desk::from_config(
            DeskConfig::default(),
            Box::new(Viewport::default()),
            MemoryStore::new(),
        )
        .unwrap()
    }

    fn token_of(action: Option<MediaAction>) -> TransitionToken {
        match action {
            Some(MediaAction::ShowStatic { token, .. }) => token,
            other => panic!("expected ShowStatic, got {:?}", other),
        }
    }

    #[test]
    fn test_startup_loads_then_switch_restarts_shared_source() {
        let mut desk = desk();
        let first = token_of(desk.init(0.0));
        assert!(matches!(desk.complete_transition(first), Some(MediaAction::Load { .. })));

        // every stock channel shares one clip
        let second = token_of(desk.next_channel(1000.0));
        assert_eq!(desk.complete_transition(second), Some(MediaAction::Restart));
    }

    #[test]
    fn test_tick_waits_for_delay() {
        let mut desk = desk();
        desk.init(0.0);
        assert!(desk.tick(599.0).is_none());
        assert!(desk.player.view().static_visible);
        assert!(desk.tick(600.0).is_some());
        assert!(!desk.player.view().static_visible);
    }

    #[test]
    fn test_rapid_switch_stale_timer_ignored() {
        let mut desk = desk();
        desk.init(0.0);
        let stale = token_of(desk.next_channel(10.0));
        let fresh = token_of(desk.next_channel(20.0));

        assert!(desk.complete_transition(stale).is_none());
        assert!(desk.player.view().static_visible);
        assert!(desk.complete_transition(fresh).is_some());
        assert_eq!(desk.player.current_index(), 2);
    }
}
