//! Transition cancellation tokens

use serde::{Deserialize, Serialize};

/// Identifies one channel transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionToken(pub u32);

/// Issues tokens in increasing order
#[derive(Clone, Debug, Default)]
pub struct TokenIssuer {
    next: u32,
}

impl TokenIssuer {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Issue a fresh token
    pub fn issue(&mut self) -> TransitionToken {
        let token = TransitionToken(self.next.max(1));
        self.next = token.0 + 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_distinct() {
        let mut issuer = TokenIssuer::new();
        let a = issuer.issue();
        let b = issuer.issue();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn test_default_issuer_starts_at_one() {
        let mut issuer = TokenIssuer::default();
        assert_eq!(issuer.issue(), TransitionToken(1));
    }
}
