// Seam trait for the line-oriented sensor source
use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by a frame source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source could not be opened. Fatal to the ingestion task; the rest
    /// of the process keeps running with absent data.
    #[error("frame source unavailable: {0}")]
    Unavailable(String),
    /// The source reached end of stream and will yield no further lines.
    #[error("frame source closed")]
    Closed,
    /// A momentary read failure; the ingestion loop logs, pauses, and
    /// retries.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A byte-stream collaborator yielding newline-terminated UTF-8 frames.
#[async_trait]
pub trait FrameSource: Send {
    /// The next frame line, trimmed of its terminator.
    ///
    /// `Ok(None)` means no line arrived within the source's per-call timeout
    /// or the line was blank — a quiet cycle, distinct from a decode failure
    /// (which is the caller's concern) and from a read error.
    async fn next_line(&mut self) -> Result<Option<String>, SourceError>;
}
