//! Reinterpretation of raw payload bytes as integer samples.

use crate::error::{WavError, WavResult};

/// Element layout for one sample: width in bytes plus signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleType {
    /// Width of one sample in bytes.
    pub bytes: usize,
    pub signed: bool,
}

impl SampleType {
    /// Layout for a bit depth, or [`WavError::UnsupportedBitDepth`] for any
    /// depth outside 8/16/32. 24-bit PCM is common in the wild but has no
    /// native integer width, so it is refused rather than silently widened.
    pub fn for_depth(bits_per_sample: u16, signed: bool) -> WavResult<Self> {
        let bytes = match bits_per_sample {
            8 => 1,
            16 => 2,
            32 => 4,
            other => return Err(WavError::UnsupportedBitDepth(other)),
        };
        Ok(SampleType { bytes, signed })
    }
}

/// Integer samples decoded from a raw payload, one variant per layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Waveform {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
}

impl Waveform {
    /// Reinterpret `raw` as little-endian samples of the given depth.
    ///
    /// A trailing partial sample is dropped, matching how a typed-array
    /// view over the same bytes would behave.
    pub fn from_raw(raw: &[u8], bits_per_sample: u16, signed: bool) -> WavResult<Self> {
        Ok(match (bits_per_sample, signed) {
            (8, true) => Waveform::I8(raw.iter().map(|&b| b as i8).collect()),
            (8, false) => Waveform::U8(raw.to_vec()),
            (16, true) => Waveform::I16(
                raw.chunks_exact(2)
                    .map(|b| i16::from_le_bytes([b[0], b[1]]))
                    .collect(),
            ),
            (16, false) => Waveform::U16(
                raw.chunks_exact(2)
                    .map(|b| u16::from_le_bytes([b[0], b[1]]))
                    .collect(),
            ),
            (32, true) => Waveform::I32(
                raw.chunks_exact(4)
                    .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .collect(),
            ),
            (32, false) => Waveform::U32(
                raw.chunks_exact(4)
                    .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
                    .collect(),
            ),
            (other, _) => return Err(WavError::UnsupportedBitDepth(other)),
        })
    }

    /// Number of whole samples.
    pub fn len(&self) -> usize {
        match self {
            Waveform::I8(v) => v.len(),
            Waveform::U8(v) => v.len(),
            Waveform::I16(v) => v.len(),
            Waveform::U16(v) => v.len(),
            Waveform::I32(v) => v.len(),
            Waveform::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples widened to i64, for comparison across layouts.
    pub fn to_i64s(&self) -> Vec<i64> {
        match self {
            Waveform::I8(v) => v.iter().map(|&s| s as i64).collect(),
            Waveform::U8(v) => v.iter().map(|&s| s as i64).collect(),
            Waveform::I16(v) => v.iter().map(|&s| s as i64).collect(),
            Waveform::U16(v) => v.iter().map(|&s| s as i64).collect(),
            Waveform::I32(v) => v.iter().map(|&s| s as i64).collect(),
            Waveform::U32(v) => v.iter().map(|&s| s as i64).collect(),
        }
    }
}
