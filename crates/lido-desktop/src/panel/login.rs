//! Guest login form
//!
//! There is no real authentication; any identifier/code pair long enough
//! is accepted.

use serde::Deserialize;
use super::StatusMessage;

/// Fields of the login form as submitted
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub identifier: String,
    pub code: String,
}

impl LoginForm {
    pub const MIN_IDENTIFIER_LEN: usize = 3;
    pub const MIN_CODE_LEN: usize = 4;

    /// Check the length rules, returning the accepted identifier
    pub fn submit(&self) -> Result<String, StatusMessage> {
        let identifier = self.identifier.trim();
        if identifier.chars().count() < Self::MIN_IDENTIFIER_LEN {
            return Err(StatusMessage::error(format!(
                "Identifier must be at least {} characters.",
                Self::MIN_IDENTIFIER_LEN
            )));
        }
        if self.code.trim().chars().count() < Self::MIN_CODE_LEN {
            return Err(StatusMessage::error(format!(
                "Access code must be at least {} characters.",
                Self::MIN_CODE_LEN
            )));
        }
        Ok(identifier.to_string())
    }
}
