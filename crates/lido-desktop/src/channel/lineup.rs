//! Channel descriptors

use serde::{Deserialize, Serialize};

/// A named media/visual preset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Short label shown on the set, e.g. `01`
    pub name: String,
    pub title: String,
    /// Media source of the main clip
    pub src: String,
    /// CSS filter applied to the main clip
    pub filter: String,
}

impl Channel {
    pub fn new(name: &str, title: &str, src: &str, filter: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            src: src.to_string(),
            filter: filter.to_string(),
        }
    }
}

/// The stock three-channel lineup
pub fn default_lineup() -> Vec<Channel> {
    vec![
        Channel::new(
            "01",
            "Lido Live",
            "media/videoplayback.mp4",
            "contrast(1.05) saturate(1.2)",
        ),
        Channel::new(
            "02",
            "Nocturne Cruise",
            "media/videoplayback.mp4",
            "contrast(1.2) saturate(0.6) hue-rotate(-20deg)",
        ),
        Channel::new(
            "03",
            "Azure A.M.",
            "media/videoplayback.mp4",
            "brightness(1.08) saturate(1.4) hue-rotate(30deg)",
        ),
    ]
}
