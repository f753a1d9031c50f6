//! FFmpeg filter construction for transition effects.
//!
//! An `Effect` descriptor is rendered into FFmpeg filter text here; all
//! pixel work happens inside FFmpeg. Commas inside expressions are escaped
//! with `\,` so they survive the filter graph parser.

use vtrans_models::{Effect, Side};

use crate::probe::VideoInfo;

/// Output pad label produced by graph filters.
pub const GRAPH_OUT: &str = "vout";

/// Shortest transition window used in expressions. A zero-length window
/// degenerates to a unit step this wide instead of dividing by zero.
const MIN_WINDOW_SECS: f64 = 0.001;

/// Filter text plus how it attaches to the FFmpeg command.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionFilter {
    /// Single-chain filter passed via `-vf`; audio is untouched.
    Video(String),
    /// Filter graph passed via `-filter_complex`, producing `[vout]`.
    /// Audio must be mapped through explicitly.
    Graph(String),
}

/// Build the filter for one effect against a probed clip.
pub fn build_transition_filter(effect: &Effect, info: &VideoInfo) -> TransitionFilter {
    let window = effect.duration().max(MIN_WINDOW_SECS);
    // Out-transitions start `window` seconds before the end of the clip.
    let start = if effect.anchors_to_end() {
        (info.duration - window).max(0.0)
    } else {
        0.0
    };

    match effect {
        Effect::FadeIn { .. } => {
            TransitionFilter::Video(format!("fade=t=in:st=0.000:d={window:.3}"))
        }
        Effect::FadeOut { .. } => {
            TransitionFilter::Video(format!("fade=t=out:st={start:.3}:d={window:.3}"))
        }
        Effect::SlideIn { side, .. } => {
            let progress = format!("min(t/{window:.3}\\,1)");
            let (x, y) = slide_in_offsets(*side, &progress);
            TransitionFilter::Graph(overlay_graph(info, &x, &y))
        }
        Effect::SlideOut { side, .. } => {
            let progress = format!("min(max(t-{start:.3}\\,0)/{window:.3}\\,1)");
            let (x, y) = slide_out_offsets(*side, &progress);
            TransitionFilter::Graph(overlay_graph(info, &x, &y))
        }
    }
}

/// Overlay the clip on a black canvas of its own frame size with animated
/// position offsets.
fn overlay_graph(info: &VideoInfo, x: &str, y: &str) -> String {
    format!(
        "color=black:size={}x{}:duration={:.3}[bg];\
         [bg][0:v]overlay=x={}:y={}:shortest=1[{}]",
        info.width, info.height, info.duration, x, y, GRAPH_OUT
    )
}

/// Offsets moving the clip from fully off-frame on `side` to rest position.
fn slide_in_offsets(side: Side, progress: &str) -> (String, String) {
    match side {
        Side::Left => (format!("w*({progress}-1)"), "0".to_string()),
        Side::Right => (format!("W-w*{progress}"), "0".to_string()),
        Side::Top => ("0".to_string(), format!("h*({progress}-1)")),
        Side::Bottom => ("0".to_string(), format!("H-h*{progress}")),
    }
}

/// Offsets moving the clip from rest position to fully off-frame on `side`.
fn slide_out_offsets(side: Side, progress: &str) -> (String, String) {
    match side {
        Side::Left => (format!("-w*{progress}"), "0".to_string()),
        Side::Right => (format!("W*{progress}"), "0".to_string()),
        Side::Top => ("0".to_string(), format!("-h*{progress}")),
        Side::Bottom => ("0".to_string(), format!("H*{progress}")),
    }
}
