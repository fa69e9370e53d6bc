//! WASM exports for the desk
//!
//! This module wraps [`Desk`] in a JS-friendly class. Structured results
//! are returned as JSON strings; the page script mirrors them into the DOM.

mod console;
mod storage;
mod viewport;

use std::fmt::Display;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::DeskConfig;
use crate::desk::Desk;
use crate::input::{DeskCommand, PointerButton};
use crate::math::{Rect, Size, Vec2};
use crate::panel::{InviteForm, LoginForm};
use crate::transition::TransitionToken;

pub use console::init_logging;
pub use storage::LocalStorage;
pub use viewport::BrowserViewport;

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

fn to_js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Desk controller for WASM - wraps Desk with a JS-friendly API
#[wasm_bindgen]
pub struct LidoDesk {
    desk: Desk<LocalStorage>,
}

#[wasm_bindgen]
impl LidoDesk {
    /// Create a desk from an optional JSON config
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<String>) -> Result<LidoDesk, JsValue> {
        init_logging();
        let config = match config {
            Some(json) => DeskConfig::from_json(&json).map_err(to_js_error)?,
            None => DeskConfig::default(),
        };
        let desk = Desk::from_config(config, Box::new(BrowserViewport::new()), LocalStorage::new())
            .map_err(to_js_error)?;
        Ok(Self { desk })
    }

    /// Page-load sequence; returns the first media action
    #[wasm_bindgen]
    pub fn init(&mut self) -> String {
        to_json(&self.desk.init(now_ms()))
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Pointer pressed on a widget body: focus only
    #[wasm_bindgen]
    pub fn activate(&mut self, widget: &str) -> String {
        to_json(&self.desk.apply(DeskCommand::Activate {
            widget: widget.to_string(),
        }))
    }

    /// Pointer pressed on a widget's drag handle
    ///
    /// `left`/`top`/`width`/`height` are the widget's
    /// `getBoundingClientRect()` at press time.
    #[wasm_bindgen(js_name = pointerDown)]
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_down(
        &mut self,
        widget: &str,
        x: f32,
        y: f32,
        button: i16,
        pointer_id: i32,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    ) -> String {
        to_json(&self.desk.apply(DeskCommand::BeginDrag {
            widget: widget.to_string(),
            pointer: Vec2::new(x, y),
            button: PointerButton::from(button),
            pointer_id,
            rect: Some(Rect::new(left, top, width, height)),
        }))
    }

    /// Pointer moved; `width`/`height` are the dragged widget's current
    /// `offsetWidth`/`offsetHeight`
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) -> String {
        to_json(&self.desk.apply(DeskCommand::DragMove {
            pointer: Vec2::new(x, y),
            size: Some(Size::new(width, height)),
        }))
    }

    /// Pointer released or cancelled
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> String {
        to_json(&self.desk.apply(DeskCommand::EndDrag))
    }

    #[wasm_bindgen]
    pub fn open(&mut self, widget: &str) -> String {
        to_json(&self.desk.apply(DeskCommand::Open {
            widget: widget.to_string(),
        }))
    }

    #[wasm_bindgen]
    pub fn close(&mut self, widget: &str) -> String {
        to_json(&self.desk.apply(DeskCommand::Close {
            widget: widget.to_string(),
        }))
    }

    /// Dock or modal control clicked
    #[wasm_bindgen]
    pub fn press(&mut self, control: &str) -> String {
        to_json(&self.desk.press(control, now_ms()))
    }

    // =========================================================================
    // Channels
    // =========================================================================

    #[wasm_bindgen(js_name = nextChannel)]
    pub fn next_channel(&mut self) -> String {
        to_json(&self.desk.next_channel(now_ms()))
    }

    #[wasm_bindgen(js_name = prevChannel)]
    pub fn prev_channel(&mut self) -> String {
        to_json(&self.desk.prev_channel(now_ms()))
    }

    /// Host timer for a static cut fired
    #[wasm_bindgen(js_name = completeTransition)]
    pub fn complete_transition(&mut self, token: u32) -> String {
        to_json(&self.desk.complete_transition(TransitionToken(token)))
    }

    /// Poll for a due static cut
    ///
    /// Reads the same `Date.now()` clock that stamps every switch, so any
    /// host loop (timer or animation frame) can drive it.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> String {
        to_json(&self.desk.tick(now_ms()))
    }

    // =========================================================================
    // Forms
    // =========================================================================

    /// `guests` is the number input's `valueAsNumber`; NaN counts as zero
    #[wasm_bindgen(js_name = submitInvite)]
    pub fn submit_invite(&mut self, name: &str, email: &str, guests: f64, arrival: &str) -> String {
        let form = InviteForm {
            name: name.to_string(),
            email: email.to_string(),
            guests: guests as i64,
            arrival: arrival.to_string(),
        };
        let submitted_at: String = js_sys::Date::new_0().to_iso_string().into();
        to_json(&self.desk.submit_invite(&form, &submitted_at))
    }

    #[wasm_bindgen(js_name = submitLogin)]
    pub fn submit_login(&mut self, identifier: &str, code: &str) -> String {
        let form = LoginForm {
            identifier: identifier.to_string(),
            code: code.to_string(),
        };
        to_json(&self.desk.submit_login(&form))
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Full render state as JSON
    #[wasm_bindgen]
    pub fn view(&self) -> String {
        to_json(&self.desk.view())
    }
}
