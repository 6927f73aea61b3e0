//! This module contains the Zstandard codec binding used by the engine.
//!
//! A `ZstdCodec` owns one compression context and one decompression context,
//! both created once and reused for every call. It is a safe, panic-free wrapper
//! around the `zstd` crate's bulk API, with a streaming fallback for frames that
//! do not declare their decompressed size.

use std::io;

use zstd::bulk::{Compressor, Decompressor};
use zstd::zstd_safe::{self, CParameter, DParameter};

use crate::traits::CodecBinding;

/// zstd's default decoder window limit (`ZSTD_WINDOWLOG_LIMIT_DEFAULT`).
pub const DECODER_WINDOW_LOG_LIMIT: u32 = 27;

/// Negative "fast" levels exist in libzstd but are not exposed.
const MIN_LEVEL: i32 = 1;

/// Upper bound on decompressed bytes per compressed byte (one RLE block of
/// 128 KiB encodes in 4 bytes). A frame header claiming more than this is not
/// trusted for pre-allocation.
const MAX_FRAME_EXPANSION: u64 = 32 * 1024;

//==================================================================================
// 1. The Codec Context
//==================================================================================

pub struct ZstdCodec {
    encoder: Compressor<'static>,
    decoder: Decompressor<'static>,
    window_log_max: u32,
}

impl ZstdCodec {
    /// The largest window (as a log) this context accepts when decoding.
    pub fn window_log_max(&self) -> u32 {
        self.window_log_max
    }

    /// Decodes frames whose header carries no content size, and inputs holding
    /// more than one frame (skippable frames included).
    fn decompress_streaming(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut decoder = zstd::stream::read::Decoder::new(data)?;
        decoder.window_log_max(self.window_log_max)?;

        // `io::copy` grows the output as needed; nothing is pre-allocated from
        // untrusted header fields.
        let mut output = Vec::with_capacity(data.len().saturating_mul(4));
        io::copy(&mut decoder, &mut output)?;
        Ok(output)
    }
}

impl CodecBinding for ZstdCodec {
    fn open(level: i32, window_log: u32) -> io::Result<Self> {
        let mut encoder = Compressor::new(level)?;
        encoder.set_parameter(CParameter::WindowLog(window_log))?;
        encoder.set_parameter(CParameter::ChecksumFlag(true))?;

        // An engine must always be able to read back what it wrote, and what a
        // default-configured encoder wrote.
        let window_log_max = window_log.max(DECODER_WINDOW_LOG_LIMIT);
        let mut decoder = Decompressor::new()?;
        decoder.set_parameter(DParameter::WindowLogMax(window_log_max))?;

        Ok(Self {
            encoder,
            decoder,
            window_log_max,
        })
    }

    fn compress(&mut self, data: &[u8]) -> io::Result<Vec<u8>> {
        self.encoder.compress(data)
    }

    fn decompress(&mut self, data: &[u8]) -> io::Result<Vec<u8>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }

        // The bulk path sizes its output from the first frame header, so it only
        // applies when that frame is the whole input.
        let single_frame =
            zstd_safe::find_frame_compressed_size(data).map_or(false, |n| n == data.len());

        match zstd_safe::get_frame_content_size(data) {
            Ok(Some(size))
                if single_frame
                    && size <= (data.len() as u64).saturating_mul(MAX_FRAME_EXPANSION) =>
            {
                self.decoder.decompress(data, size as usize)
            }
            Ok(_) => self.decompress_streaming(data),
            Err(_) => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "input is not a zstd frame or its header is corrupted",
            )),
        }
    }

    fn level_bounds() -> (i32, i32) {
        (MIN_LEVEL, zstd_safe::max_c_level())
    }

    fn default_level() -> i32 {
        zstd::DEFAULT_COMPRESSION_LEVEL
    }

    fn version() -> String {
        zstd_safe::version_string().to_string()
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    /// A frame with no content size whose window descriptor asks for 2^30 bytes,
    /// followed by one raw last-block holding `x`.
    fn frame_with_window_log_30() -> Vec<u8> {
        let mut frame = Vec::new();
        frame.extend_from_slice(&[0x28, 0xB5, 0x2F, 0xFD]); // magic
        frame.push(0x00); // descriptor: no checksum, no content size, not single segment
        frame.push(20 << 3); // window descriptor: exponent 20 -> log 30
        frame.extend_from_slice(&[0x09, 0x00, 0x00]); // last block, raw, size 1
        frame.push(b'x');
        frame
    }

    #[test]
    fn test_zstd_roundtrip_simple_text() {
        let mut codec = ZstdCodec::open(3, 22).unwrap();
        let original_bytes =
            b"hello world, this is a test of zstd compression. hello world, this is a test."
                .to_vec();

        let compressed_bytes = codec.compress(&original_bytes).unwrap();
        assert!(compressed_bytes.len() < original_bytes.len());

        let decompressed_bytes = codec.decompress(&compressed_bytes).unwrap();
        assert_eq!(original_bytes, decompressed_bytes);
    }

    #[test]
    fn test_zstd_roundtrip_highly_compressible_data() {
        let mut codec = ZstdCodec::open(5, 22).unwrap();
        let original_bytes = vec![42u8; 10_000];

        let compressed_bytes = codec.compress(&original_bytes).unwrap();
        assert!(compressed_bytes.len() < 50);

        let decompressed_bytes = codec.decompress(&compressed_bytes).unwrap();
        assert_eq!(original_bytes, decompressed_bytes);
    }

    #[test]
    fn test_zstd_decompress_invalid_data() {
        let mut codec = ZstdCodec::open(3, 22).unwrap();
        assert!(codec.decompress(&[1, 2, 3, 4, 5]).is_err());
    }

    #[test]
    fn test_zstd_decompress_truncated_frame() {
        let mut codec = ZstdCodec::open(3, 22).unwrap();
        let data: Vec<u8> = (0..4096u32).map(|i| (i * 7 % 251) as u8).collect();
        let compressed = codec.compress(&data).unwrap();

        let truncated = &compressed[..compressed.len() / 2];
        assert!(codec.decompress(truncated).is_err());
    }

    #[test]
    fn test_zstd_decodes_frames_without_content_size() {
        // The streaming encoder does not pledge a size, so the header omits it.
        let data = b"streamed frame, streamed frame, streamed frame".repeat(50);
        let compressed = zstd::stream::encode_all(&data[..], 3).unwrap();
        assert_eq!(zstd_safe::get_frame_content_size(&compressed).ok(), Some(None));

        let mut codec = ZstdCodec::open(3, 22).unwrap();
        assert_eq!(codec.decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn test_zstd_rejects_window_above_limit() {
        let mut codec = ZstdCodec::open(3, 22).unwrap();
        assert_eq!(codec.window_log_max(), DECODER_WINDOW_LOG_LIMIT);
        assert!(codec.decompress(&frame_with_window_log_30()).is_err());
    }

    #[test]
    fn test_zstd_decodes_concatenated_frames() {
        let mut codec = ZstdCodec::open(3, 22).unwrap();
        let mut stream = codec.compress(b"first frame ").unwrap();
        stream.extend(codec.compress(b"second frame").unwrap());

        assert_eq!(codec.decompress(&stream).unwrap(), b"first frame second frame".to_vec());
    }

    #[test]
    fn test_zstd_skips_leading_skippable_frame() {
        let mut codec = ZstdCodec::open(3, 22).unwrap();
        let mut stream = Vec::new();
        stream.extend_from_slice(&[0x50, 0x2A, 0x4D, 0x18]); // skippable magic
        stream.extend_from_slice(&4u32.to_le_bytes());
        stream.extend_from_slice(b"meta");
        stream.extend(codec.compress(b"payload after metadata").unwrap());

        assert_eq!(codec.decompress(&stream).unwrap(), b"payload after metadata".to_vec());
    }

    #[test]
    fn test_zstd_frames_carry_checksum() {
        let mut codec = ZstdCodec::open(3, 22).unwrap();
        let frame = codec.compress(b"checked").unwrap();
        assert_ne!(frame[4] & 0x04, 0, "content checksum flag not set");
    }

    #[test]
    fn test_zstd_detects_corrupted_payload() {
        // Incompressible input is stored as a raw block, so a flipped byte still
        // parses and only the checksum can catch it.
        let mut rng = StdRng::seed_from_u64(42);
        let mut data = vec![0u8; 1024];
        rng.fill(&mut data[..]);

        let mut codec = ZstdCodec::open(3, 22).unwrap();
        let mut frame = codec.compress(&data).unwrap();
        assert_eq!(codec.decompress(&frame).unwrap(), data);

        let middle = frame.len() / 2;
        frame[middle] ^= 0xFF;
        assert!(codec.decompress(&frame).is_err());
    }

    #[test]
    fn test_zstd_empty_input_is_empty_output() {
        let mut codec = ZstdCodec::open(3, 22).unwrap();
        assert!(codec.decompress(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_zstd_reports_bounds_and_version() {
        let (min, max) = ZstdCodec::level_bounds();
        assert_eq!(min, 1);
        assert!(max >= 19);
        assert_eq!(ZstdCodec::default_level(), 3);
        assert!(ZstdCodec::version().starts_with("1."));
    }
}
