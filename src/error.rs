// In: src/error.rs

//! This module defines the single, unified error type for the engine and the
//! translator that turns codec failures into it.
//!
//! Every failure a caller can observe is one of four kinds. The codec's own
//! diagnostic text is kept in the message so it stays actionable, but callers
//! branch on [`ErrorKind`], never on codec error codes.

use std::fmt;
use std::io;

use thiserror::Error;

//==================================================================================
// I. The Error Kind Discriminator
//==================================================================================

/// The stable discriminator carried by every [`EngineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A level or window size outside the codec's bounds, rejected at construction.
    Validation,
    /// An operation on an engine that has already been closed.
    State,
    /// The codec failed while compressing.
    Compression,
    /// The codec failed while decompressing (malformed, truncated or window too large).
    Decompression,
}

impl ErrorKind {
    /// The name surfaced to the embedding layer.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Validation => "ValidationError",
            ErrorKind::State => "StateError",
            ErrorKind::Compression => "CompressionError",
            ErrorKind::Decompression => "DecompressionError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==================================================================================
// II. The Unified Error Type
//==================================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid compressor configuration: {0}")]
    Validation(String),

    #[error("Invalid compressor state: {0}")]
    State(String),

    #[error("Compression failed: {0}")]
    Compression(String),

    #[error("Decompression failed: {0}")]
    Decompression(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Validation(_) => ErrorKind::Validation,
            EngineError::State(_) => ErrorKind::State,
            EngineError::Compression(_) => ErrorKind::Compression,
            EngineError::Decompression(_) => ErrorKind::Decompression,
        }
    }

    /// The message without the kind prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            EngineError::Validation(msg)
            | EngineError::State(msg)
            | EngineError::Compression(msg)
            | EngineError::Decompression(msg) => msg,
        }
    }

    pub(crate) fn closed(operation: &str) -> Self {
        EngineError::State(format!("cannot {} on a closed compressor", operation))
    }

    // --- Translator: codec failures -> taxonomy ---

    pub(crate) fn from_compress_failure(err: io::Error) -> Self {
        EngineError::Compression(codec_diagnostic(&err))
    }

    pub(crate) fn from_decompress_failure(err: io::Error) -> Self {
        EngineError::Decompression(codec_diagnostic(&err))
    }

    /// A codec that refused to open a context for otherwise in-range parameters.
    pub(crate) fn from_context_failure(err: io::Error) -> Self {
        EngineError::Compression(format!(
            "failed to create codec context: {}",
            codec_diagnostic(&err)
        ))
    }
}

/// Extracts the human-readable part of a codec error.
///
/// The `zstd` crate reports failures as `io::Error`s whose message is the text of
/// `ZSTD_getErrorName`, so the message is kept and the `io::ErrorKind` is dropped.
fn codec_diagnostic(err: &io::Error) -> String {
    let text = err.to_string();
    if text.is_empty() {
        format!("{:?}", err.kind())
    } else {
        text
    }
}

//==================================================================================
// III. Python Conversion
//==================================================================================

#[cfg(feature = "python")]
impl From<EngineError> for pyo3::PyErr {
    fn from(err: EngineError) -> pyo3::PyErr {
        crate::ffi::python::CompressionException::new_err((
            err.kind().as_str(),
            err.to_string(),
        ))
    }
}
