//! Shared data models for clip transitions.
//!
//! This crate provides Serde-serializable types for:
//! - Transition effect descriptors (fade/slide variants)
//! - The directional side token set for slides
//! - Encoding configuration forwarded to the media layer

pub mod effect;
pub mod encoding;

// Re-export common types
pub use effect::{Effect, Side, SideParseError};
pub use encoding::EncodingConfig;
