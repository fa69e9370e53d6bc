//! Integration tests for Desk
//!
//! These tests verify the full page workflow including:
//! - Startup focus and z-order growth
//! - Dragging with clamping against a live viewport
//! - Dock controls, including a control aimed at a missing widget
//! - Channel switching with stale timers
//! - Invite submission against the persisted list

use std::cell::Cell;
use std::rc::Rc;

use lido_desktop::{
    CommandOutcome, Desk, DeskCommand, DeskConfig, InviteForm, KeyValueStore, LoginForm,
    MediaAction, MemoryStore, Placement, PointerButton, PressOutcome, Rect, Size, TransitionToken,
    TriggerAction, TriggerConfig, Vec2, Viewport, ViewportBounds, INVITES_KEY,
};

fn create_desk() -> Desk<MemoryStore> {
    let mut desk = Desk::from_config(
        DeskConfig::default(),
        Box::new(Viewport::new(1280.0, 800.0)),
        MemoryStore::new(),
    )
    .unwrap();
    desk.init(0.0);
    desk
}

fn token_of(action: Option<MediaAction>) -> TransitionToken {
    match action {
        Some(MediaAction::ShowStatic { token, .. }) => token,
        other => panic!("expected ShowStatic, got {:?}", other),
    }
}

fn invite(name: &str, email: &str, guests: i64) -> InviteForm {
    InviteForm {
        name: name.to_string(),
        email: email.to_string(),
        guests,
        arrival: "2026-07-04".to_string(),
    }
}

/// Viewport whose size the test can change while a drag is running
#[derive(Clone)]
struct SharedViewport(Rc<Cell<Size>>);

impl ViewportBounds for SharedViewport {
    fn viewport_size(&self) -> Size {
        self.0.get()
    }
}

// =============================================================================
// Focus and Z-Order Tests
// =============================================================================

#[test]
fn test_startup_focuses_primary_widget() {
    let desk = create_desk();
    let view = desk.view();

    assert_eq!(view.focused.as_deref(), Some("window-tv"));
    assert_eq!(view.widgets.iter().filter(|w| w.active).count(), 1);

    let guestbook = desk.windows.get("window-guestbook").unwrap();
    assert!(!guestbook.visible);
}

#[test]
fn test_activation_sequence_strictly_increases_z() {
    let mut desk = create_desk();
    let mut last = desk.windows.top_z();

    for id in ["window-notes", "window-tv", "window-notes", "window-guestbook"] {
        match desk.apply(DeskCommand::Activate { widget: id.to_string() }) {
            CommandOutcome::Activated { z_order, .. } => {
                assert!(z_order > last);
                last = z_order;
            }
            other => panic!("expected Activated, got {:?}", other),
        }
        assert_eq!(desk.view().focused.as_deref(), Some(id));
        assert_eq!(desk.windows.widgets().iter().filter(|w| w.active).count(), 1);
    }
}

#[test]
fn test_close_does_not_refocus() {
    let mut desk = create_desk();
    desk.apply(DeskCommand::Close { widget: "window-tv".to_string() });

    assert!(desk.view().focused.is_none());
    assert!(!desk.windows.get("window-notes").unwrap().active);
}

// =============================================================================
// Drag Tests
// =============================================================================

#[test]
fn test_drag_clamped_to_viewport() {
    let mut desk = create_desk();

    // tv sits at (32, 96), 480x360
    desk.apply(DeskCommand::BeginDrag {
        widget: "window-tv".to_string(),
        pointer: Vec2::new(100.0, 110.0),
        button: PointerButton::Primary,
        pointer_id: 1,
        rect: None,
    });

    desk.apply(DeskCommand::DragMove { pointer: Vec2::new(5000.0, 5000.0), size: None });
    let tv = desk.windows.get("window-tv").unwrap();
    assert!((tv.position.x - 788.0).abs() < 0.001);
    assert!((tv.position.y - 428.0).abs() < 0.001);
    assert_eq!(tv.placement, Placement::Absolute);
    assert!(tv.position.x + tv.size.width <= 1280.0 - 12.0 + 0.001);
    assert!(tv.position.y + tv.size.height <= 800.0 - 12.0 + 0.001);

    desk.apply(DeskCommand::DragMove { pointer: Vec2::new(0.0, 0.0), size: None });
    let tv = desk.windows.get("window-tv").unwrap();
    assert!((tv.position.x - 8.0).abs() < 0.001);
    assert!((tv.position.y - 68.0).abs() < 0.001);

    let outcome = desk.apply(DeskCommand::EndDrag);
    assert_eq!(outcome, CommandOutcome::DragEnded { pointer_id: 1 });

    // moves after release do nothing
    let outcome = desk.apply(DeskCommand::DragMove { pointer: Vec2::new(400.0, 400.0), size: None });
    assert_eq!(outcome, CommandOutcome::Ignored);
}

#[test]
fn test_resize_during_drag_applies_on_next_move() {
    let size = Rc::new(Cell::new(Size::new(1280.0, 800.0)));
    let mut desk = Desk::from_config(
        DeskConfig::default(),
        Box::new(SharedViewport(size.clone())),
        MemoryStore::new(),
    )
    .unwrap();
    desk.init(0.0);

    desk.apply(DeskCommand::BeginDrag {
        widget: "window-notes".to_string(),
        pointer: Vec2::new(560.0, 120.0),
        button: PointerButton::Primary,
        pointer_id: 4,
        rect: None,
    });
    desk.apply(DeskCommand::DragMove { pointer: Vec2::new(2000.0, 2000.0), size: None });
    let notes = desk.windows.get("window-notes").unwrap();
    assert!((notes.position.x - 948.0).abs() < 0.001);

    size.set(Size::new(1000.0, 700.0));
    desk.apply(DeskCommand::DragMove { pointer: Vec2::new(2000.0, 2000.0), size: None });
    let notes = desk.windows.get("window-notes").unwrap();
    assert!((notes.position.x - 668.0).abs() < 0.001);
    assert!((notes.position.y - 428.0).abs() < 0.001);
}

#[test]
fn test_stylesheet_placed_widget_keeps_grab_point() {
    let mut desk = create_desk();

    // rendered at (900, 400) although declared at (560, 120)
    desk.apply(DeskCommand::BeginDrag {
        widget: "window-notes".to_string(),
        pointer: Vec2::new(910.0, 410.0),
        button: PointerButton::Primary,
        pointer_id: 5,
        rect: Some(Rect::new(900.0, 400.0, 300.0, 220.0)),
    });
    let outcome = desk.apply(DeskCommand::DragMove { pointer: Vec2::new(911.0, 410.0), size: None });
    assert_eq!(
        outcome,
        CommandOutcome::Moved {
            widget: "window-notes".to_string(),
            position: Vec2::new(901.0, 400.0),
        }
    );

    // clamped with the rendered size, not the declared 320x260
    desk.apply(DeskCommand::DragMove { pointer: Vec2::new(5000.0, 5000.0), size: None });
    let notes = desk.windows.get("window-notes").unwrap();
    assert!((notes.position.x - 968.0).abs() < 0.001);
    assert!((notes.position.y - 568.0).abs() < 0.001);
}

#[test]
fn test_secondary_button_does_not_drag() {
    let mut desk = create_desk();
    let outcome = desk.apply(DeskCommand::BeginDrag {
        widget: "window-notes".to_string(),
        pointer: Vec2::new(600.0, 130.0),
        button: PointerButton::Secondary,
        pointer_id: 2,
        rect: None,
    });

    assert_eq!(outcome, CommandOutcome::Ignored);
    assert!(!desk.windows.is_dragging());
    assert_eq!(desk.view().focused.as_deref(), Some("window-tv"));
}

// =============================================================================
// Dock Tests
// =============================================================================

#[test]
fn test_dock_opens_and_focuses_hidden_widget() {
    let mut desk = create_desk();
    desk.press("dock-guestbook", 5.0);

    let view = desk.view();
    assert_eq!(view.focused.as_deref(), Some("window-guestbook"));
    assert_eq!(view.widgets.last().map(|w| w.id.as_str()), Some("window-guestbook"));
}

#[test]
fn test_dock_control_for_missing_widget_is_inert() {
    let mut config = DeskConfig::default();
    config
        .triggers
        .push(TriggerConfig::new("dock-radio", TriggerAction::Open, Some("window-radio")));
    let mut desk =
        Desk::from_config(config, Box::new(Viewport::default()), MemoryStore::new()).unwrap();
    desk.init(0.0);

    let before = desk.view();
    assert_eq!(desk.press("dock-radio", 5.0), PressOutcome::Unbound);
    assert_eq!(desk.view(), before);
}

// =============================================================================
// Channel Tests
// =============================================================================

#[test]
fn test_rapid_switches_end_on_last_channel() {
    let mut desk = Desk::from_config(
        DeskConfig::default(),
        Box::new(Viewport::new(1280.0, 800.0)),
        MemoryStore::new(),
    )
    .unwrap();
    let startup = token_of(desk.init(0.0));
    assert!(matches!(desk.complete_transition(startup), Some(MediaAction::Load { .. })));

    let first = token_of(desk.next_channel(100.0));
    let second = token_of(desk.next_channel(200.0));
    assert_ne!(first, second);

    // first timer fires late and must not resolve the newer switch
    assert!(desk.complete_transition(first).is_none());
    assert!(desk.tick(700.0).is_none());

    assert_eq!(desk.tick(800.0), Some(MediaAction::Restart));
    let view = desk.view();
    assert_eq!(view.player.label, "03");
    assert_eq!(view.player.title, "Azure A.M.");
    assert!(!view.player.static_visible);
    assert!(!view.player.main_hidden);
}

#[test]
fn test_prev_wraps_to_last_channel() {
    let mut desk = create_desk();
    desk.prev_channel(10.0);
    assert_eq!(desk.player.current_index(), 2);
    assert_eq!(desk.view().player.label, "03");
}

// =============================================================================
// Invite Tests
// =============================================================================

#[test]
fn test_invite_then_duplicate() {
    let mut desk = create_desk();

    let status = desk.submit_invite(&invite("Ana", "ana@x.co", 2), "2026-06-01T10:00:00.000Z");
    assert!(!status.is_error());
    assert_eq!(status.text, "You're on the beach list, Ana!");

    let records = desk.invites().load();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].email, "ana@x.co");
    assert_eq!(records[0].guests, 2);

    let status = desk.submit_invite(&invite("Ana", "ana@x.co", 2), "2026-06-01T10:05:00.000Z");
    assert!(status.is_error());
    assert_eq!(status.text, "You're already on the beach list.");
    assert_eq!(desk.invites().load().len(), 1);
}

#[test]
fn test_persisted_json_shape() {
    let mut desk = create_desk();
    desk.submit_invite(&invite("Ana", "ana@x.co", 2), "2026-06-01T10:00:00.000Z");

    let raw = desk.invites().backend().get(INVITES_KEY).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["submittedAt"], "2026-06-01T10:00:00.000Z");
    assert_eq!(json[0]["guests"], 2);
}

#[test]
fn test_corrupt_invite_list_treated_as_empty() {
    let mut store = MemoryStore::new();
    store.set(INVITES_KEY, "{not json").unwrap();
    let mut desk =
        Desk::from_config(DeskConfig::default(), Box::new(Viewport::default()), store).unwrap();

    assert!(desk.invites().load().is_empty());
    let status = desk.submit_invite(&invite("Bo", "bo@x.co", 1), "t0");
    assert!(!status.is_error());
    assert_eq!(desk.invites().load().len(), 1);
}

#[test]
fn test_invalid_invites_leave_store_untouched() {
    let mut desk = create_desk();

    let status = desk.submit_invite(&invite("Ana", "ana@x", 2), "t0");
    assert_eq!(status.text, "Please enter a valid email address.");

    let status = desk.submit_invite(&invite("Ana", "ana@x.co", 0), "t0");
    assert_eq!(status.text, "Guest count must be at least 1.");

    assert_eq!(desk.invites().backend().writes(), 0);
}

#[test]
fn test_login_and_panel_view() {
    let mut desk = create_desk();
    desk.press("auth-open", 0.0);
    desk.press("tab-login", 0.0);

    desk.submit_login(&LoginForm {
        identifier: "ana@x.co".to_string(),
        code: "beach".to_string(),
    });

    let panel = desk.view().panel;
    assert!(!panel.hidden);
    assert!(panel.tabs.iter().any(|tab| tab.name == "login" && tab.selected));
    assert_eq!(panel.signed_in.as_deref(), Some("ana@x.co"));
}
