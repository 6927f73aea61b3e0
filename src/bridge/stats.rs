// In: src/bridge/stats.rs

//! Per-call compression statistics.

use std::time::Duration;

use serde::Serialize;

/// The snapshot returned by `Compressor::get_stats`.
///
/// This is a plain `Copy` value: a caller holding one is never affected by a
/// later compress call on the same engine.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompressionStats {
    /// Bytes handed to the codec.
    pub original_size: u64,
    /// Bytes produced by the codec.
    pub compressed_size: u64,
    /// `original_size / compressed_size`, or `0.0` when nothing was produced.
    pub compression_ratio: f64,
    /// Wall time of the codec call alone, in seconds, from a monotonic clock.
    pub compression_time: f64,
}

impl CompressionStats {
    /// Builds the snapshot for one successful compress call.
    pub(crate) fn record(original_size: usize, compressed_size: usize, elapsed: Duration) -> Self {
        let compression_ratio = if compressed_size == 0 {
            0.0
        } else {
            original_size as f64 / compressed_size as f64
        };

        Self {
            original_size: original_size as u64,
            compressed_size: compressed_size as u64,
            compression_ratio,
            compression_time: elapsed.as_secs_f64(),
        }
    }

    /// True until the first successful compress call.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
