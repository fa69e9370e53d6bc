//! Invite and login submission

use tracing::info;
use crate::panel::{InviteForm, LoginForm, StatusMessage};
use crate::persistence::KeyValueStore;
use super::Desk;

impl<S: KeyValueStore> Desk<S> {
    /// Submit the invite form; the returned status is also shown on the panel
    pub fn submit_invite(&mut self, form: &InviteForm, submitted_at: &str) -> StatusMessage {
        let status = form.submit(&mut self.invites, submitted_at);
        self.panel.set_status(status.clone());
        status
    }

    /// Submit the login form
    pub fn submit_login(&mut self, form: &LoginForm) -> StatusMessage {
        let status = match form.submit() {
            Ok(identifier) => {
                info!(identifier = %identifier, "guest signed in");
                let status = StatusMessage::success(format!("Welcome back, {}!", identifier));
                self.panel.sign_in(identifier);
                status
            }
            Err(status) => status,
        };
        self.panel.set_status(status.clone());
        status
    }
}
