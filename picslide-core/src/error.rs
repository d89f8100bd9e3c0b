use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    /// Grid layout rejected: a block count or a source dimension was zero.
    #[error("invalid grid spec: {0}")]
    InvalidGridSpec(String),

    /// The progress file could not be written. Non-fatal to a running
    /// session; the caller keeps playing without persisted progress.
    #[error("failed to write progress file")]
    StorageWrite(#[source] std::io::Error),
}
