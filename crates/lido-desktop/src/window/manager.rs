//! Window manager for activation, visibility, z-order and dragging

use tracing::{debug, warn};
use crate::input::{CommandOutcome, DeskCommand, InputRouter, PointerButton};
use crate::math::{Rect, Size, Vec2};
use crate::viewport::{DragBounds, ViewportBounds};
use super::{Placement, Widget, WidgetConfig, ZOrderStack};

/// Owns every declared widget and the single drag session
///
/// Widgets keep their declaration order; lookups are by element id.
pub struct WindowManager {
    /// Widgets in declaration order
    widgets: Vec<Widget>,
    /// Stacking priority counter
    stack: ZOrderStack,
    /// Drag session holder
    input: InputRouter,
    /// Source of viewport dimensions, queried on every drag move
    viewport: Box<dyn ViewportBounds>,
    /// Edge margins for dragged widgets
    bounds: DragBounds,
}

impl WindowManager {
    /// Create a manager for the declared widgets
    ///
    /// Declared widgets start stacked in declaration order, below the first
    /// priority the z-order stack will hand out.
    pub fn new(
        configs: Vec<WidgetConfig>,
        viewport: Box<dyn ViewportBounds>,
        bounds: DragBounds,
    ) -> Self {
        let stack = ZOrderStack::new(configs.len());
        let widgets = configs
            .into_iter()
            .enumerate()
            .map(|(i, config)| Widget::from_config(config, i as u32 + 1))
            .collect();

        Self {
            widgets,
            stack,
            input: InputRouter::new(),
            viewport,
            bounds,
        }
    }

    /// Replace the viewport source
    pub fn set_viewport(&mut self, viewport: Box<dyn ViewportBounds>) {
        self.viewport = viewport;
    }

    /// Get a widget by id
    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }

    /// All widgets in declaration order
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// Widgets sorted back to front
    pub fn widgets_by_z(&self) -> Vec<&Widget> {
        let mut widgets: Vec<&Widget> = self.widgets.iter().collect();
        widgets.sort_by_key(|w| w.z_order);
        widgets
    }

    /// The active widget, if it is also visible
    pub fn focused(&self) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.is_focused())
    }

    /// Highest stacking priority handed out so far
    #[inline]
    pub fn top_z(&self) -> u32 {
        self.stack.top()
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// Number of declared widgets
    pub fn count(&self) -> usize {
        self.widgets.len()
    }

    /// Run one command
    pub fn apply(&mut self, command: DeskCommand) -> CommandOutcome {
        debug!(?command, "window manager command");
        match command {
            DeskCommand::Activate { widget } => self.pointer_activate(&widget),
            DeskCommand::BeginDrag {
                widget,
                pointer,
                button,
                pointer_id,
                rect,
            } => self.begin_drag(&widget, pointer, button, pointer_id, rect),
            DeskCommand::DragMove { pointer, size } => self.drag_move(pointer, size),
            DeskCommand::EndDrag => self.end_drag(),
            DeskCommand::Close { widget } => self.close(&widget),
            DeskCommand::Open { widget } => self.open(&widget),
        }
    }

    /// Make `id` the only active widget, show it and raise it to the front
    pub fn activate(&mut self, id: &str) -> CommandOutcome {
        let Some(index) = self.widgets.iter().position(|w| w.id == id) else {
            return CommandOutcome::MissingTarget { widget: id.to_string() };
        };

        for widget in self.widgets.iter_mut() {
            widget.active = false;
        }

        let z_order = self.stack.raise();
        let widget = &mut self.widgets[index];
        widget.visible = true;
        widget.active = true;
        widget.z_order = z_order;

        CommandOutcome::Activated {
            widget: widget.id.clone(),
            z_order,
        }
    }

    /// Pointer-down on a widget body
    ///
    /// Only widgets with a drag handle listen for pointer input; a press on
    /// any other widget changes nothing.
    pub fn pointer_activate(&mut self, id: &str) -> CommandOutcome {
        match self.get(id) {
            Some(widget) if widget.drag_handle => self.activate(id),
            Some(_) => CommandOutcome::Ignored,
            None => CommandOutcome::MissingTarget { widget: id.to_string() },
        }
    }

    /// Show and activate a widget by id
    ///
    /// An unknown id is a page configuration error: it is logged and
    /// otherwise ignored so the caller never fails.
    pub fn open(&mut self, id: &str) -> CommandOutcome {
        match self.get_mut(id) {
            Some(widget) => widget.visible = true,
            None => {
                warn!(widget = id, "open requested for undeclared widget");
                return CommandOutcome::MissingTarget { widget: id.to_string() };
            }
        }
        self.activate(id)
    }

    /// Hide a widget
    ///
    /// No other widget is activated in its place; if the closed widget was
    /// active, nothing is focused until the next activation.
    pub fn close(&mut self, id: &str) -> CommandOutcome {
        match self.get_mut(id) {
            Some(widget) => {
                widget.visible = false;
                CommandOutcome::Closed { widget: id.to_string() }
            }
            None => CommandOutcome::MissingTarget { widget: id.to_string() },
        }
    }

    /// Start dragging `id` by its handle
    ///
    /// Only primary-button presses start a drag; other buttons are ignored
    /// without activating the widget. `rendered` is the widget's on-screen
    /// rectangle at press time; when given it replaces the stored geometry
    /// so the grab point is measured from where the widget really is.
    pub fn begin_drag(
        &mut self,
        id: &str,
        pointer: Vec2,
        button: PointerButton,
        pointer_id: i32,
        rendered: Option<Rect>,
    ) -> CommandOutcome {
        if button != PointerButton::Primary {
            return CommandOutcome::Ignored;
        }

        let origin = match self.get_mut(id) {
            Some(widget) if widget.drag_handle => {
                let rect = rendered.unwrap_or_else(|| widget.rect());
                widget.position = rect.origin();
                widget.size = rect.size();
                widget.position
            }
            Some(_) => return CommandOutcome::Ignored,
            None => return CommandOutcome::MissingTarget { widget: id.to_string() },
        };

        self.activate(id);
        self.input.start_drag(id.to_string(), pointer - origin, pointer_id);

        CommandOutcome::DragStarted {
            widget: id.to_string(),
            pointer_id,
        }
    }

    /// Move the dragged widget so the grab point follows the pointer
    ///
    /// `rendered_size` is the widget's current on-screen size, if the host
    /// measured it; otherwise the size captured at drag start is used.
    pub fn drag_move(&mut self, pointer: Vec2, rendered_size: Option<Size>) -> CommandOutcome {
        let Some(session) = self.input.drag_session() else {
            return CommandOutcome::Ignored;
        };
        let candidate = session.candidate(pointer);
        let id = session.widget.clone();

        let viewport = self.viewport.viewport_size();
        let bounds = self.bounds;
        let Some(widget) = self.get_mut(&id) else {
            return CommandOutcome::MissingTarget { widget: id };
        };

        if let Some(size) = rendered_size {
            widget.size = size;
        }
        widget.position = bounds.clamp(candidate, viewport, widget.size);
        widget.placement = Placement::Absolute;

        CommandOutcome::Moved {
            widget: id,
            position: widget.position,
        }
    }

    /// End the drag session and release the captured pointer
    pub fn end_drag(&mut self) -> CommandOutcome {
        match self.input.end_drag() {
            Some(session) => CommandOutcome::DragEnded {
                pointer_id: session.pointer_id,
            },
            None => CommandOutcome::Ignored,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::viewport::Viewport;
    use proptest::prelude::*;

    const IDS: [&str; 4] = ["window-tv", "window-notes", "window-guestbook", "window-radio"];

    fn manager(viewport: Size) -> WindowManager {
        WindowManager::new(
            IDS.iter()
                .map(|id| WidgetConfig::new(id, id, Vec2::new(40.0, 90.0), Size::new(320.0, 220.0)))
                .collect(),
            Box::new(Viewport::new(viewport.width, viewport.height)),
            DragBounds::default(),
        )
    }

    proptest! {
        /// Exactly one widget is active after any activation sequence, and
        /// it holds the highest priority handed out
        #[test]
        fn activation_keeps_single_top_widget(picks in proptest::collection::vec(0usize..IDS.len(), 1..40)) {
            let mut wm = manager(Size::new(1280.0, 800.0));
            let mut last_z = wm.top_z();
            for pick in &picks {
                wm.activate(IDS[*pick]);
                prop_assert!(wm.top_z() > last_z);
                last_z = wm.top_z();
            }

            let active: Vec<&Widget> = wm.widgets().iter().filter(|w| w.active).collect();
            prop_assert_eq!(active.len(), 1);
            prop_assert_eq!(active[0].id.as_str(), IDS[*picks.last().unwrap()]);
            prop_assert_eq!(active[0].z_order, wm.top_z());
            let max_z = wm.widgets().iter().map(|w| w.z_order).max().unwrap();
            prop_assert_eq!(active[0].z_order, max_z);
        }

        /// A dragged widget's corner never leaves the clamp rectangle
        /// (lower bounds winning when the widget does not fit)
        #[test]
        fn drag_stays_in_bounds(
            vw in 100.0f32..2000.0,
            vh in 100.0f32..1400.0,
            moves in proptest::collection::vec((-3000.0f32..3000.0, -3000.0f32..3000.0), 1..20),
        ) {
            let mut wm = manager(Size::new(vw, vh));
            wm.begin_drag("window-tv", Vec2::new(60.0, 100.0), PointerButton::Primary, 1, None);

            for (x, y) in moves {
                wm.drag_move(Vec2::new(x, y), None);
                let widget = wm.get("window-tv").unwrap();
                let max_x = (vw - widget.size.width - 12.0).max(8.0);
                let max_y = (vh - widget.size.height - 12.0).max(68.0);
                prop_assert!(widget.position.x >= 8.0 && widget.position.x <= max_x);
                prop_assert!(widget.position.y >= 68.0 && widget.position.y <= max_y);
            }
        }
    }
}
