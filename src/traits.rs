//! This module defines the seam between the engine and the codec it drives.

use std::io;

/// A codec context bound to one level and window size.
///
/// An implementation owns whatever native state the codec needs. The engine
/// guarantees a context is never used by two operations at once, so methods take
/// `&mut self`; independent contexts must be usable from different threads
/// concurrently, hence `Send`.
///
/// Failures are reported as the codec's own `io::Error`; translating them into
/// the engine's taxonomy is the engine's job, not the codec's.
pub trait CodecBinding: Send + Sized {
    /// Allocates a context for `level` and `window_log`. Parameters have already
    /// been validated against [`CodecBinding::level_bounds`].
    fn open(level: i32, window_log: u32) -> io::Result<Self>;

    /// Compresses `data` into a single self-describing frame.
    fn compress(&mut self, data: &[u8]) -> io::Result<Vec<u8>>;

    /// Decompresses a frame produced by any context of this codec.
    fn decompress(&mut self, data: &[u8]) -> io::Result<Vec<u8>>;

    /// Inclusive `(min, max)` compression levels this codec build accepts.
    fn level_bounds() -> (i32, i32);

    /// The level a codec uses when none is requested.
    fn default_level() -> i32;

    /// The codec library's version string.
    fn version() -> String;
}
