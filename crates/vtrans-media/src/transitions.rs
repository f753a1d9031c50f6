//! Built-in clip transitions.
//!
//! Thin facade over a clip handle's effect application capability: each
//! function constructs one descriptor, forwards it as a one-element
//! sequence, and returns whatever the handle's engine returns. Parameter
//! range enforcement belongs to the engine.

use vtrans_models::{Effect, Side};

use crate::clip::ApplyEffects;
use crate::error::MediaResult;

/// Fade the clip in from black over `t` seconds.
pub async fn fadein_transition<C: ApplyEffects>(clip: &C, t: f64) -> MediaResult<C> {
    clip.with_effects(&[Effect::fade_in(t)]).await
}

/// Fade the clip out to black over `t` seconds.
pub async fn fadeout_transition<C: ApplyEffects>(clip: &C, t: f64) -> MediaResult<C> {
    clip.with_effects(&[Effect::fade_out(t)]).await
}

/// Slide the clip into frame from `side` over `t` seconds.
pub async fn slidein_transition<C: ApplyEffects>(clip: &C, t: f64, side: Side) -> MediaResult<C> {
    clip.with_effects(&[Effect::slide_in(t, side)]).await
}

/// Slide the clip out of frame through `side` over `t` seconds.
pub async fn slideout_transition<C: ApplyEffects>(clip: &C, t: f64, side: Side) -> MediaResult<C> {
    clip.with_effects(&[Effect::slide_out(t, side)]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every `with_effects` call and returns a marker handle.
    #[derive(Clone)]
    struct StubClip {
        marker: &'static str,
        calls: Arc<Mutex<Vec<Vec<Effect>>>>,
    }

    impl StubClip {
        fn new() -> Self {
            Self {
                marker: "source",
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait::async_trait]
    impl ApplyEffects for StubClip {
        async fn with_effects(&self, effects: &[Effect]) -> MediaResult<Self> {
            self.calls.lock().unwrap().push(effects.to_vec());
            Ok(Self {
                marker: "applied",
                calls: Arc::clone(&self.calls),
            })
        }
    }

    #[tokio::test]
    async fn test_fadein_passthrough() {
        let clip = StubClip::new();
        let result = fadein_transition(&clip, 2.5).await.unwrap();

        // The facade returns exactly what the engine returned.
        assert_eq!(result.marker, "applied");

        let calls = clip.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![Effect::fade_in(2.5)]);
    }

    #[tokio::test]
    async fn test_fadeout_passthrough() {
        let clip = StubClip::new();
        let result = fadeout_transition(&clip, 1.0).await.unwrap();

        assert_eq!(result.marker, "applied");

        let calls = clip.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], vec![Effect::fade_out(1.0)]);
    }

    #[tokio::test]
    async fn test_slide_passthrough_all_sides() {
        for side in Side::ALL {
            let clip = StubClip::new();
            slidein_transition(&clip, 0.75, *side).await.unwrap();
            slideout_transition(&clip, 0.75, *side).await.unwrap();

            let calls = clip.calls.lock().unwrap();
            assert_eq!(calls.len(), 2);
            assert_eq!(calls[0], vec![Effect::slide_in(0.75, *side)]);
            assert_eq!(calls[1], vec![Effect::slide_out(0.75, *side)]);
        }
    }

    #[tokio::test]
    async fn test_duration_forwarded_unvalidated() {
        // Range enforcement is the engine's contract, not the facade's.
        let clip = StubClip::new();
        fadein_transition(&clip, 0.0).await.unwrap();

        let calls = clip.calls.lock().unwrap();
        assert_eq!(calls[0], vec![Effect::fade_in(0.0)]);
    }
}
