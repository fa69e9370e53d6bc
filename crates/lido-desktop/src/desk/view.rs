//! Render state handed to the host

use serde::Serialize;
use crate::channel::PlayerView;
use crate::panel::PanelView;
use crate::persistence::KeyValueStore;
use crate::window::{Widget, WidgetId};
use super::Desk;

/// Everything the host needs to mirror the desk into the page
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskView {
    /// Widgets sorted back to front
    pub widgets: Vec<Widget>,
    pub focused: Option<WidgetId>,
    pub player: PlayerView,
    pub panel: PanelView,
}

impl<S: KeyValueStore> Desk<S> {
    /// Snapshot of the render state
    pub fn view(&self) -> DeskView {
        DeskView {
            widgets: self.windows.widgets_by_z().into_iter().cloned().collect(),
            focused: self.windows.focused().map(|w| w.id.clone()),
            player: self.player.view(),
            panel: self.panel.view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DeskConfig;
    use crate::persistence::MemoryStore;
    use crate::viewport::Viewport;
    use super::*;

    #[test]
    fn test_view_orders_widgets_back_to_front() {
        let mut desk = Desk::from_config(
            DeskConfig::default(),
            Box::new(Viewport::default()),
            MemoryStore::new(),
        )
        .unwrap();
        desk.init(0.0);

        let view = desk.view();
        assert_eq!(view.focused.as_deref(), Some("window-tv"));
        assert_eq!(view.widgets.last().map(|w| w.id.as_str()), Some("window-tv"));
        assert!(view.widgets.windows(2).all(|pair| pair[0].z_order <= pair[1].z_order));
        assert!(view.player.static_visible);
        assert!(view.panel.hidden);
    }

    #[test]
    fn test_view_json_shape() {
        let mut desk = Desk::from_config(
            DeskConfig::default(),
            Box::new(Viewport::default()),
            MemoryStore::new(),
        )
        .unwrap();
        desk.init(0.0);

        let json = serde_json::to_value(desk.view()).unwrap();
        assert_eq!(json["focused"], "window-tv");
        assert_eq!(json["player"]["label"], "01");
        assert_eq!(json["panel"]["hidden"], true);
        assert!(json["widgets"][0]["zOrder"].is_number());
    }
}
