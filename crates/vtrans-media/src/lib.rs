//! FFmpeg CLI wrapper for clip transition effects.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - FFprobe-based clip inspection
//! - Transition filter construction (fade and slide variants)
//! - A four-operation transition facade over an opaque clip handle
//!
//! The facade depends only on the [`clip::ApplyEffects`] capability;
//! [`clip::VideoClip`] is the shipped FFmpeg-backed implementation.

pub mod clip;
pub mod command;
pub mod error;
pub mod filters;
pub mod probe;
pub mod transitions;

// Re-export common types
pub use clip::{ApplyEffects, VideoClip};
pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use filters::{build_transition_filter, TransitionFilter};
pub use probe::{get_duration, probe_video, VideoInfo};
pub use transitions::{
    fadein_transition, fadeout_transition, slidein_transition, slideout_transition,
};
