use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while generating a color scheme.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid color: {0}: expected # followed by six hex digits")]
    InvalidColor(String),

    #[error("Invalid keypoint position: {input}: {reason}")]
    InvalidPosition { input: String, reason: String },

    #[error("Need at least two gradient keypoints! (got {0} arguments, expected an even number of at least 4)")]
    InvalidKeypointCount(usize),

    #[error("Keypoint {index} at position {pos} comes before the previous one at {prev}")]
    UnsortedPositions { index: usize, pos: f64, prev: f64 },

    #[error("Invalid colorscheme name: {0:?}: must be a C identifier")]
    InvalidName(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot encode {}: {source}", .path.display())]
    Png {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
