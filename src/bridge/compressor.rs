// In: src/bridge/compressor.rs

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::bridge::stats::CompressionStats;
use crate::config::CompressorConfig;
use crate::error::EngineError;
use crate::kernels::ZstdCodec;
use crate::traits::CodecBinding;

/// Everything an open engine owns. Dropping it releases the codec context.
struct OpenState<C> {
    codec: C,
    stats: CompressionStats,
}

/// A high-level, stateful object bound to one level and window size.
///
/// The engine owns exactly one codec context from `new` until `close` (or drop).
/// Calls are serialized on an internal lock, so one instance may be shared
/// between threads behind an `Arc`; distinct instances share nothing.
pub struct Compressor<C: CodecBinding = ZstdCodec> {
    config: CompressorConfig,
    /// `None` once closed. There is no way back to `Some`.
    state: Mutex<Option<OpenState<C>>>,
}

impl Compressor<ZstdCodec> {
    /// Validates `level` and `window_size` and opens a zstd context for them.
    pub fn create(level: i32, window_size: i32) -> Result<Self, EngineError> {
        Self::new(CompressorConfig::new(level, window_size))
    }
}

impl<C: CodecBinding> Compressor<C> {
    /// Creates a new engine from a config.
    ///
    /// Validation runs before the codec is touched, so a rejected config never
    /// allocates anything.
    pub fn new(config: CompressorConfig) -> Result<Self, EngineError> {
        config.validate::<C>()?;

        let codec = C::open(config.level, config.window_log())
            .map_err(EngineError::from_context_failure)?;
        log::debug!(
            "opened codec context (level={}, window_size={})",
            config.level,
            config.window_size
        );

        Ok(Self {
            config,
            state: Mutex::new(Some(OpenState {
                codec,
                stats: CompressionStats::default(),
            })),
        })
    }

    pub fn config(&self) -> CompressorConfig {
        self.config
    }

    pub fn level(&self) -> i32 {
        self.config.level
    }

    pub fn window_size(&self) -> i32 {
        self.config.window_size
    }

    pub fn is_closed(&self) -> bool {
        self.lock().is_none()
    }

    /// Compresses `data` into a single frame and records its statistics.
    ///
    /// On failure the engine stays open and the previous statistics are kept.
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, EngineError> {
        let mut guard = self.lock();
        let state = guard.as_mut().ok_or_else(|| EngineError::closed("compress"))?;

        let start = Instant::now();
        let result = state.codec.compress(data);
        let elapsed = start.elapsed();

        let compressed = result.map_err(|e| {
            log::warn!("compress of {} bytes failed: {}", data.len(), e);
            EngineError::from_compress_failure(e)
        })?;

        state.stats = CompressionStats::record(data.len(), compressed.len(), elapsed);
        log_metric!(
            "event" = "compress",
            "level" = &self.config.level,
            "original_size" = &data.len(),
            "compressed_size" = &compressed.len(),
            "elapsed" = format!("{:.2?}", elapsed),
        );

        Ok(compressed)
    }

    /// Decompresses a frame. Statistics are not touched.
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, EngineError> {
        let mut guard = self.lock();
        let state = guard.as_mut().ok_or_else(|| EngineError::closed("decompress"))?;

        let decompressed = state.codec.decompress(data).map_err(|e| {
            log::warn!("decompress of {} bytes failed: {}", data.len(), e);
            EngineError::from_decompress_failure(e)
        })?;

        log_metric!(
            "event" = "decompress",
            "compressed_size" = &data.len(),
            "decompressed_size" = &decompressed.len(),
        );

        Ok(decompressed)
    }

    /// Returns a copy of the statistics of the last successful compress call.
    ///
    /// Before any compress call this is a zeroed snapshot, not an error.
    pub fn get_stats(&self) -> Result<CompressionStats, EngineError> {
        self.lock()
            .as_ref()
            .map(|state| state.stats)
            .ok_or_else(|| EngineError::closed("read stats"))
    }

    /// Releases the codec context. Calling it again is a no-op.
    pub fn close(&self) {
        if self.lock().take().is_some() {
            log::debug!(
                "closed codec context (level={}, window_size={})",
                self.config.level,
                self.config.window_size
            );
        }
    }

    /// A panic while holding the lock cannot leave the state half-written: stats
    /// are assigned in one move after the codec call returns.
    fn lock(&self) -> MutexGuard<'_, Option<OpenState<C>>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: CodecBinding> std::fmt::Debug for Compressor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compressor")
            .field("config", &self.config)
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LEVEL_DEFAULT, WINDOW_SIZE_DEFAULT};
    use crate::error::ErrorKind;

    #[test]
    fn test_compressor_roundtrip() -> Result<(), EngineError> {
        let compressor = Compressor::create(LEVEL_DEFAULT, WINDOW_SIZE_DEFAULT)?;
        let original = b"The quick brown fox jumps over the lazy dog. ".repeat(100);

        let compressed = compressor.compress(&original)?;
        assert!(compressed.len() < original.len());

        let decompressed = compressor.decompress(&compressed)?;
        assert_eq!(original, decompressed);
        Ok(())
    }

    #[test]
    fn test_accessors_expose_bound_config() -> Result<(), EngineError> {
        let compressor = Compressor::create(9, 24)?;
        assert_eq!(compressor.level(), 9);
        assert_eq!(compressor.window_size(), 24);
        assert_eq!(compressor.config(), CompressorConfig::new(9, 24));
        assert!(!compressor.is_closed());
        Ok(())
    }

    #[test]
    fn test_stats_are_zeroed_before_first_compress() -> Result<(), EngineError> {
        let compressor = Compressor::create(LEVEL_DEFAULT, WINDOW_SIZE_DEFAULT)?;
        let stats = compressor.get_stats()?;
        assert!(stats.is_empty());
        assert_eq!(stats.compression_ratio, 0.0);
        Ok(())
    }

    #[test]
    fn test_close_is_idempotent_and_terminal() -> Result<(), EngineError> {
        let compressor = Compressor::create(LEVEL_DEFAULT, WINDOW_SIZE_DEFAULT)?;
        let compressed = compressor.compress(b"payload")?;

        compressor.close();
        compressor.close();
        assert!(compressor.is_closed());

        assert_eq!(compressor.compress(b"payload").unwrap_err().kind(), ErrorKind::State);
        assert_eq!(compressor.decompress(&compressed).unwrap_err().kind(), ErrorKind::State);
        assert_eq!(compressor.get_stats().unwrap_err().kind(), ErrorKind::State);
        Ok(())
    }

    #[test]
    fn test_debug_output_reports_state() -> Result<(), EngineError> {
        let compressor = Compressor::create(LEVEL_DEFAULT, WINDOW_SIZE_DEFAULT)?;
        assert!(format!("{:?}", compressor).contains("closed: false"));
        compressor.close();
        assert!(format!("{:?}", compressor).contains("closed: true"));
        Ok(())
    }
}
