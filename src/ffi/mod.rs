//! This module is the Foreign Function Interface (FFI) layer: the embedding layer
//! that marshals host byte buffers in and out of the engine and surfaces
//! `EngineError` through the host's exception mechanism.
//!
//! Only the Python binding exists today. It is compiled with the `python`
//! feature so the pure-Rust engine builds and tests without a Python toolchain.

//==================================================================================
// 1. Module Declarations
//==================================================================================
/// Contains all logic for interfacing with the Python/CPython ecosystem.
pub mod python;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::python::{
    compress_py, decompress_py, enable_verbose_logging_py, get_info_py, CompressionException,
    PyCompressor,
};
