//! Error types for WAV container operations.

use std::io;
use thiserror::Error;

/// Result type alias for container operations.
pub type WavResult<T> = std::result::Result<T, WavError>;

/// Errors surfaced by the container core and its collaborators.
///
/// Every parsing failure is fatal to the calling operation and carries a
/// distinct variant so callers can branch on cause. Nothing is retried
/// internally; malformed input is the caller's problem to report.
#[derive(Debug, Error)]
pub enum WavError {
    /// No `fmt ` chunk anywhere in the chunk list.
    #[error("couldn't find fmt chunk in wav data")]
    MissingFormatChunk,

    /// A `fmt ` chunk exists but cannot hold the 16-byte format descriptor.
    #[error("fmt chunk holds {size} bytes, need at least 16")]
    TruncatedFormatChunk {
        /// Usable byte count of the fmt chunk.
        size: u32,
    },

    /// The format tag is neither integer PCM (1) nor extensible (0xFFFE).
    #[error("unknown audio format {0:#06X} in wav data")]
    UnsupportedAudioFormat(u16),

    /// The last chunk found is not `data`.
    #[error("couldn't find data chunk in wav data")]
    MissingDataChunk,

    /// The data chunk's declared size runs past the end of the buffer.
    #[error("data chunk runs to byte {needed} but buffer ends at {len}")]
    TruncatedPayload {
        /// Byte offset one past the declared end of the payload.
        needed: usize,
        /// Actual buffer length.
        len: usize,
    },

    /// The buffer is too long for its size to fit a 32-bit RIFF field.
    #[error("cannot fix sizes of a {len}-byte file, RIFF size fields are 32-bit")]
    FileTooLarge {
        /// Actual buffer length.
        len: u64,
    },

    /// Bit depth outside 8/16/32. 24-bit PCM lands here on purpose.
    #[error("unsupported bit depth {0}, expected 8, 16 or 32")]
    UnsupportedBitDepth(u16),

    /// An I/O error from a file or pipe.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The external transcoder exited non-zero.
    #[error("ffmpeg failed ({status}): {stderr}")]
    Transcode {
        /// Exit status as reported by the process.
        status: String,
        /// Tail of the transcoder's stderr output.
        stderr: String,
    },

    /// The reference decoder rejected the input.
    #[error("reference decode error: {0}")]
    Decode(String),
}

impl WavError {
    /// Create a new reference-decoder error with the given message.
    pub fn decode(message: impl Into<String>) -> Self {
        WavError::Decode(message.into())
    }
}
