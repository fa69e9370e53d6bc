//! Static-noise channel transitions
//!
//! A switch shows the static clip at once and swaps back to the main media
//! after [`STATIC_DURATION_MS`]. Each switch is identified by a
//! [`TransitionToken`]; starting a new switch invalidates the previous
//! token so a late completion cannot overwrite the newer channel.

mod static_cut;
mod token;

pub use static_cut::{StaticCut, TransitionPhase};
pub use token::{TokenIssuer, TransitionToken};

/// How long the static clip stays up, in milliseconds
pub const STATIC_DURATION_MS: u32 = 600;
