//! Render error types.

/// Errors produced while encoding or writing frames.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    /// Writing the frame to disk failed.
    #[error("failed to write frame {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}
