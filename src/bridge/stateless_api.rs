// In: src/bridge/stateless_api.rs

use serde::Serialize;

use crate::bridge::compressor::Compressor;
use crate::config::{CompressorConfig, LEVEL_DEFAULT, WINDOW_SIZE_DEFAULT};
use crate::error::EngineError;
use crate::kernels::ZstdCodec;
use crate::traits::CodecBinding;

/// What the linked codec supports, queried fresh on every call.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionInfo {
    pub version: String,
    pub min_level: i32,
    pub max_level: i32,
    pub default_level: i32,
}

/// Compresses `data` with a transient engine at `level` and the default window.
/// No statistics survive the call.
pub fn compress(data: &[u8], level: i32) -> Result<Vec<u8>, EngineError> {
    let compressor = Compressor::<ZstdCodec>::new(CompressorConfig::new(level, WINDOW_SIZE_DEFAULT))?;
    let result = compressor.compress(data);
    compressor.close();
    result
}

/// Same as [`compress`] at the default level.
pub fn compress_default(data: &[u8]) -> Result<Vec<u8>, EngineError> {
    compress(data, LEVEL_DEFAULT)
}

/// Decompresses a frame with a transient default-configured engine.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, EngineError> {
    let compressor = Compressor::<ZstdCodec>::new(CompressorConfig::default())?;
    let result = compressor.decompress(data);
    compressor.close();
    result
}

/// Reports the codec's version and level bounds. No engine is created.
pub fn get_info() -> ExtensionInfo {
    info_for::<ZstdCodec>()
}

pub(crate) fn info_for<C: CodecBinding>() -> ExtensionInfo {
    let (min_level, max_level) = C::level_bounds();
    ExtensionInfo {
        version: C::version(),
        min_level,
        max_level,
        default_level: C::default_level(),
    }
}
