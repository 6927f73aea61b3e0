//! This file is the root of the `zstd_engine` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`bridge`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the engine's public surface for Rust callers.
//! 3.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python (`python` feature only).

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod traits;

#[cfg(feature = "python")]
mod ffi;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use bridge::{CompressionStats, Compressor, ExtensionInfo};
pub use config::{
    CompressorConfig, LevelPreset, LEVEL_BEST, LEVEL_BETTER, LEVEL_DEFAULT, LEVEL_FASTEST,
    LEVEL_ULTRA, WINDOW_SIZE_DEFAULT, WINDOW_SIZE_MAX, WINDOW_SIZE_MIN,
};
pub use error::{EngineError, ErrorKind};
pub use observability::enable_verbose_logging;

//==================================================================================
// 3. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `zstd_engine` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn zstd_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // --- Quick functions ---
    m.add_function(wrap_pyfunction!(ffi::compress_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::decompress_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::get_info_py, m)?)?;

    // --- Stateful engine ---
    m.add_class::<ffi::PyCompressor>()?;

    // --- Level and window constants, mirrored at module level ---
    m.add("LEVEL_FASTEST", LEVEL_FASTEST)?;
    m.add("LEVEL_DEFAULT", LEVEL_DEFAULT)?;
    m.add("LEVEL_BETTER", LEVEL_BETTER)?;
    m.add("LEVEL_BEST", LEVEL_BEST)?;
    m.add("LEVEL_ULTRA", LEVEL_ULTRA)?;
    m.add("WINDOW_SIZE_MIN", WINDOW_SIZE_MIN)?;
    m.add("WINDOW_SIZE_DEFAULT", WINDOW_SIZE_DEFAULT)?;
    m.add("WINDOW_SIZE_MAX", WINDOW_SIZE_MAX)?;

    // --- Expose the custom error type ---
    m.add(
        "CompressionException",
        m.py().get_type_bound::<ffi::CompressionException>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Opt-in logging backend ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
