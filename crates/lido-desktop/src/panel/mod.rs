//! Authentication/invite modal
//!
//! Two tabbed forms behind one modal. Form problems are reported through a
//! [`StatusMessage`] shown inline; nothing here returns an error.

mod invite;
mod login;

pub use invite::{is_valid_email, InviteForm};
pub use login::LoginForm;

use serde::Serialize;

/// Tabs of the modal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelTab {
    #[default]
    Invite,
    Login,
}

impl PanelTab {
    /// Resolve a tab by its `data-tab` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "invite" => Some(PanelTab::Invite),
            "login" => Some(PanelTab::Login),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PanelTab::Invite => "invite",
            PanelTab::Login => "login",
        }
    }
}

/// Severity of an inline status line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Inline status line under a form
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == StatusKind::Error
    }
}

/// One tab as the host renders it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub name: &'static str,
    /// Mirrors `aria-selected`
    pub selected: bool,
}

/// Render state of the modal
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    /// Mirrors `aria-hidden` on the modal
    pub hidden: bool,
    pub tabs: Vec<TabView>,
    pub status: Option<StatusMessage>,
    /// Identifier of the signed-in guest, if any
    pub signed_in: Option<String>,
}

/// Modal state: visibility, selected tab, last status, session
#[derive(Clone, Debug, Default)]
pub struct AuthPanel {
    open: bool,
    tab: PanelTab,
    status: Option<StatusMessage>,
    signed_in: Option<String>,
}

impl AuthPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the modal on its current tab
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the modal and clear its status line
    pub fn close(&mut self) {
        self.open = false;
        self.status = None;
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn tab(&self) -> PanelTab {
        self.tab
    }

    /// Select a tab by name; unknown names leave the selection unchanged
    pub fn select_tab(&mut self, name: &str) -> bool {
        match PanelTab::from_name(name) {
            Some(tab) => {
                if tab != self.tab {
                    self.status = None;
                }
                self.tab = tab;
                true
            }
            None => false,
        }
    }

    /// Last status line
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub(crate) fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    /// Identifier accepted by the last successful login
    pub fn signed_in(&self) -> Option<&str> {
        self.signed_in.as_deref()
    }

    pub(crate) fn sign_in(&mut self, identifier: String) {
        self.signed_in = Some(identifier);
    }

    /// Render state
    pub fn view(&self) -> PanelView {
        PanelView {
            hidden: !self.open,
            tabs: [PanelTab::Invite, PanelTab::Login]
                .into_iter()
                .map(|tab| TabView {
                    name: tab.name(),
                    selected: tab == self.tab,
                })
                .collect(),
            status: self.status.clone(),
            signed_in: self.signed_in.clone(),
        }
    }
}
