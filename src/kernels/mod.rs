//! This module holds the codec bindings the engine can drive.
//!
//! Each binding implements [`crate::traits::CodecBinding`]; the engine itself
//! never calls a codec library directly.

/// Zstandard, through the `zstd` crate's bulk and streaming APIs.
pub mod zstd;

pub use self::zstd::ZstdCodec;
