//! Clip handles and the effect application capability.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use vtrans_models::{Effect, EncodingConfig};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::{MediaError, MediaResult};
use crate::filters::{build_transition_filter, TransitionFilter, GRAPH_OUT};
use crate::probe::probe_video;

/// Capability to apply transition effects to an opaque clip handle.
///
/// This is the seam the transition facade depends on: the handle receives a
/// sequence of descriptors and yields a new handle. Callers never inspect
/// handle internals; range enforcement on descriptor parameters belongs to
/// the implementing engine.
#[async_trait]
pub trait ApplyEffects: Sized {
    async fn with_effects(&self, effects: &[Effect]) -> MediaResult<Self>;
}

/// FFmpeg-backed clip handle.
///
/// Each applied effect is one FFmpeg pass over the underlying file; the
/// returned handle points at the derived output. The source file is never
/// modified.
#[derive(Debug, Clone)]
pub struct VideoClip {
    path: PathBuf,
    output_dir: PathBuf,
    encoding: EncodingConfig,
}

impl VideoClip {
    /// Open a handle over an existing media file.
    ///
    /// # Errors
    /// Returns `FileNotFound` if the file does not exist.
    pub fn open(path: impl AsRef<Path>) -> MediaResult<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(MediaError::FileNotFound(path));
        }

        let output_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            path,
            output_dir,
            encoding: EncodingConfig::default(),
        })
    }

    /// Set the directory derived files are written to (defaults to the
    /// input's directory).
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set encoding parameters for derived files.
    pub fn with_encoding(mut self, encoding: EncodingConfig) -> Self {
        self.encoding = encoding;
        self
    }

    /// Path of the underlying media file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Output path for a derived file, unique per application.
    fn derived_path(&self, effect: &Effect) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("clip");
        let ext = self
            .path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("mp4");
        let tag = Uuid::new_v4().simple().to_string();

        self.output_dir.join(format!(
            "{}_{}_{}.{}",
            stem,
            effect.as_filename_part(),
            &tag[..8],
            ext
        ))
    }

    /// Apply a single effect via one FFmpeg pass.
    async fn apply_one(&self, effect: &Effect) -> MediaResult<VideoClip> {
        let probe = probe_video(&self.path).await?;
        let output = self.derived_path(effect);

        info!(
            "Applying {}: {} -> {} (window: {:.2}s)",
            effect,
            self.path.display(),
            output.display(),
            effect.duration()
        );

        let mut cmd = FfmpegCommand::new(&self.path, &output).encoding(&self.encoding);

        match build_transition_filter(effect, &probe) {
            TransitionFilter::Video(filter) => {
                cmd = cmd.video_filter(filter);
            }
            TransitionFilter::Graph(graph) => {
                cmd = cmd
                    .filter_complex(graph)
                    .map(format!("[{GRAPH_OUT}]"))
                    .map("0:a?");
            }
        }

        FfmpegRunner::new().run(&cmd).await?;

        Ok(VideoClip {
            path: output,
            output_dir: self.output_dir.clone(),
            encoding: self.encoding.clone(),
        })
    }
}

#[async_trait]
impl ApplyEffects for VideoClip {
    async fn with_effects(&self, effects: &[Effect]) -> MediaResult<Self> {
        let mut current = self.clone();
        for effect in effects {
            current = current.apply_one(effect).await?;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_clip(dir: &TempDir) -> VideoClip {
        let path = dir.path().join("scene.mp4");
        std::fs::write(&path, b"fake video").unwrap();
        VideoClip::open(&path).unwrap()
    }

    #[test]
    fn test_open_missing_file() {
        let err = VideoClip::open("/nonexistent/clip.mp4").unwrap_err();
        assert!(matches!(err, MediaError::FileNotFound(_)));
    }

    #[test]
    fn test_derived_path_naming() {
        let dir = TempDir::new().unwrap();
        let clip = fake_clip(&dir);

        let derived = clip.derived_path(&Effect::fade_in(1.0));
        let name = derived.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("scene_fade_in_"));
        assert!(name.ends_with(".mp4"));
        assert_eq!(derived.parent().unwrap(), dir.path());

        // Unique per application
        let again = clip.derived_path(&Effect::fade_in(1.0));
        assert_ne!(derived, again);
    }

    #[test]
    fn test_output_dir_override() {
        let dir = TempDir::new().unwrap();
        let out_dir = TempDir::new().unwrap();
        let clip = fake_clip(&dir).with_output_dir(out_dir.path());

        let derived = clip.derived_path(&Effect::fade_out(0.5));
        assert_eq!(derived.parent().unwrap(), out_dir.path());
    }

    #[test]
    fn test_with_effects_empty_is_identity() {
        let dir = TempDir::new().unwrap();
        let clip = fake_clip(&dir);

        let result = tokio_test::block_on(clip.with_effects(&[])).unwrap();
        assert_eq!(result.path(), clip.path());
    }
}
