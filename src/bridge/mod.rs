// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of the engine. It is the boundary between
// the embedding layer (host byte buffers, host exceptions) and the codec binding.
//
// Data Flow (stateful):
//
//   1. [Compressor::new(config)]        -> validates config, opens ONE codec context
//         |
//         `-> compress / decompress, N times, serialized on the engine's lock
//         |
//         `-> compress records CompressionStats after each success
//
//   2. [Compressor::close() / Drop]     -> releases the context exactly once
//
// Data Flow (stateless):
//
//   [stateless_api::compress/decompress] -> transient Compressor, one call, close
//   [stateless_api::get_info]            -> codec bounds + version, no context
//
// ====================================================================================
pub(crate) mod compressor;
pub mod stateless_api;
pub mod stats;

// --- High-Level Stateful API ---
pub use compressor::Compressor;
pub use stats::CompressionStats;

// --- Low-Level Stateless API (for FFI and testing) ---
pub use stateless_api::{compress, compress_default, decompress, get_info, ExtensionInfo};
