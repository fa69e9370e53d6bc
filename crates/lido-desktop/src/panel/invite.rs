//! Invite request form

use serde::Deserialize;
use tracing::{info, warn};
use crate::persistence::{InviteRecord, InviteStore, KeyValueStore};
use super::StatusMessage;

/// Fields of the invite form as submitted
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InviteForm {
    pub name: String,
    pub email: String,
    /// Raw number field value; may be zero or negative
    pub guests: i64,
    pub arrival: String,
}

/// Whitespace as the page's regexes and `String.trim` see it
///
/// Unicode `White_Space` plus the byte-order mark, minus NEL (U+0085).
fn is_page_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Permissive email check: one `@`, no whitespace, and a dot inside the
/// domain with text on both sides
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(is_page_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

impl InviteForm {
    /// Validate and persist the request
    ///
    /// Rejections (bad email, no guests, duplicate email) leave the store
    /// untouched.
    pub fn submit<S: KeyValueStore>(
        &self,
        store: &mut InviteStore<S>,
        submitted_at: &str,
    ) -> StatusMessage {
        let email = self.email.trim_matches(is_page_space);
        if !is_valid_email(email) {
            return StatusMessage::error("Please enter a valid email address.");
        }
        if self.guests < 1 {
            return StatusMessage::error("Guest count must be at least 1.");
        }
        if store.contains_email(email) {
            return StatusMessage::error("You're already on the beach list.");
        }

        let name = self.name.trim();
        let record = InviteRecord {
            name: name.to_string(),
            email: email.to_string(),
            guests: u32::try_from(self.guests).unwrap_or(u32::MAX),
            arrival: self.arrival.trim().to_string(),
            submitted_at: submitted_at.to_string(),
        };

        match store.append(record) {
            Ok(count) => {
                info!(count, "invite recorded");
                if name.is_empty() {
                    StatusMessage::success("You're on the beach list!")
                } else {
                    StatusMessage::success(format!("You're on the beach list, {}!", name))
                }
            }
            Err(err) => {
                warn!(error = %err, "invite could not be saved");
                StatusMessage::error("Could not save your invite. Please try again.")
            }
        }
    }
}
