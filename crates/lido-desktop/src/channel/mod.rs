//! Simulated TV channel player

mod lineup;
mod player;

pub use lineup::{default_lineup, Channel};
pub use player::{ChannelPlayer, MediaAction, PlayerView};
