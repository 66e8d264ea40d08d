//! Scheduler configuration and the defaults applied to new tweens.

use serde::{Deserialize, Serialize};

use crate::ease::EaseKind;
use crate::error::TweenError;
use crate::tween::PlayStyle;

/// Defaults copied into every tween at registration time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenDefaults {
    pub ease: EaseKind,
    pub play_style: PlayStyle,
    /// Start stepping immediately; otherwise tweens register paused.
    pub auto_play: bool,
    /// Drop tweens from the scheduler once they complete.
    pub auto_remove: bool,
    /// Duration in seconds for tweens that never set one.
    pub duration: f32,
}

impl Default for TweenDefaults {
    fn default() -> Self {
        Self {
            ease: EaseKind::Linear,
            play_style: PlayStyle::Normal,
            auto_play: true,
            auto_remove: true,
            duration: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub defaults: TweenDefaults,
    /// Initial capacity hint for the live list.
    pub capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            defaults: TweenDefaults::default(),
            capacity: 64,
        }
    }
}

impl SchedulerConfig {
    pub fn from_json(text: &str) -> Result<Self, TweenError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SchedulerConfig::from_json(r#"{ "defaults": { "ease": "OutQuad" } }"#).unwrap();
        assert_eq!(cfg.defaults.ease, EaseKind::OutQuad);
        assert!(cfg.defaults.auto_remove);
        assert_eq!(cfg.capacity, 64);
    }

    #[test]
    fn bad_json_is_config_error() {
        let err = SchedulerConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.category(), "config");
    }
}
