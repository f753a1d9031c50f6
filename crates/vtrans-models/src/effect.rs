//! Transition effect descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Frame side a slide transition enters from or leaves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// All valid side tokens.
    pub const ALL: &'static [Side] = &[Side::Left, Side::Right, Side::Top, Side::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Top => "top",
            Side::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Side {
    type Err = SideParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            _ => Err(SideParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown side: {0}")]
pub struct SideParseError(String);

/// A single transition to apply to a clip.
///
/// Descriptors are constructed per call, handed to a clip handle's apply
/// capability as a one-element sequence, and discarded. Durations are in
/// seconds; the external engine owns range enforcement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Fade in from black over the first `duration` seconds.
    FadeIn { duration: f64 },
    /// Fade out to black over the last `duration` seconds.
    FadeOut { duration: f64 },
    /// Slide into frame from `side` over the first `duration` seconds.
    SlideIn { duration: f64, side: Side },
    /// Slide out of frame through `side` over the last `duration` seconds.
    SlideOut { duration: f64, side: Side },
}

impl Effect {
    pub fn fade_in(duration: f64) -> Self {
        Effect::FadeIn { duration }
    }

    pub fn fade_out(duration: f64) -> Self {
        Effect::FadeOut { duration }
    }

    pub fn slide_in(duration: f64, side: Side) -> Self {
        Effect::SlideIn { duration, side }
    }

    pub fn slide_out(duration: f64, side: Side) -> Self {
        Effect::SlideOut { duration, side }
    }

    /// Returns the effect name as used in filenames and logs.
    pub fn as_filename_part(&self) -> &'static str {
        match self {
            Effect::FadeIn { .. } => "fade_in",
            Effect::FadeOut { .. } => "fade_out",
            Effect::SlideIn { .. } => "slide_in",
            Effect::SlideOut { .. } => "slide_out",
        }
    }

    /// Transition window length in seconds.
    pub fn duration(&self) -> f64 {
        match self {
            Effect::FadeIn { duration }
            | Effect::FadeOut { duration }
            | Effect::SlideIn { duration, .. }
            | Effect::SlideOut { duration, .. } => *duration,
        }
    }

    /// Side token for slide variants, `None` for fades.
    pub fn side(&self) -> Option<Side> {
        match self {
            Effect::SlideIn { side, .. } | Effect::SlideOut { side, .. } => Some(*side),
            Effect::FadeIn { .. } | Effect::FadeOut { .. } => None,
        }
    }

    /// Whether the transition window is anchored to the end of the clip.
    pub fn anchors_to_end(&self) -> bool {
        matches!(self, Effect::FadeOut { .. } | Effect::SlideOut { .. })
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filename_part())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse_roundtrip() {
        for side in Side::ALL {
            assert_eq!(side.as_str().parse::<Side>().unwrap(), *side);
        }
        assert_eq!("LEFT".parse::<Side>().unwrap(), Side::Left);
        assert!("diagonal".parse::<Side>().is_err());
    }

    #[test]
    fn test_effect_accessors() {
        let fade = Effect::fade_in(2.5);
        assert!((fade.duration() - 2.5).abs() < f64::EPSILON);
        assert_eq!(fade.side(), None);
        assert!(!fade.anchors_to_end());

        let slide = Effect::slide_out(1.0, Side::Bottom);
        assert_eq!(slide.side(), Some(Side::Bottom));
        assert!(slide.anchors_to_end());
        assert_eq!(slide.as_filename_part(), "slide_out");
    }

    #[test]
    fn test_effect_serde() {
        let effect = Effect::slide_in(1.5, Side::Right);
        let json = serde_json::to_string(&effect).unwrap();
        assert!(json.contains("\"effect\":\"slide_in\""));
        assert!(json.contains("\"side\":\"right\""));

        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, effect);
    }
}
