//! WAVE format extraction over an in-memory buffer.

use crate::error::{WavError, WavResult};
use crate::scanner::extract_subchunks;
use crate::types::{WavAudio, WavSubChunk};

/// Integer PCM format tag.
pub const FORMAT_PCM: u16 = 0x0001;
/// WAVE_FORMAT_EXTENSIBLE format tag.
pub const FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// Smallest fmt payload able to carry the fields read here.
const FMT_MIN_SIZE: usize = 16;

/// Parse the format descriptor and sample payload out of `data`.
///
/// Scans the chunk list first; use [`read_wav_audio_with`] to reuse an
/// existing scan of the same buffer.
pub fn read_wav_audio(data: &[u8]) -> WavResult<WavAudio<'_>> {
    let subchunks = extract_subchunks(data);
    read_wav_audio_with(data, &subchunks)
}

/// Parse using a chunk list produced by scanning `data`.
///
/// The payload of the returned [`WavAudio`] borrows from `data`; nothing
/// is copied.
pub fn read_wav_audio_with<'a>(
    data: &'a [u8],
    subchunks: &[WavSubChunk],
) -> WavResult<WavAudio<'a>> {
    let fmt = subchunks
        .iter()
        .find(|c| &c.id == b"fmt ")
        .ok_or(WavError::MissingFormatChunk)?;
    if (fmt.size as usize) < FMT_MIN_SIZE {
        return Err(WavError::TruncatedFormatChunk { size: fmt.size });
    }

    let pos = fmt.data_start();
    let fields = data
        .get(pos..pos + FMT_MIN_SIZE)
        .ok_or(WavError::TruncatedFormatChunk { size: fmt.size })?;

    let audio_format = u16::from_le_bytes(fields[0..2].try_into().unwrap());
    if audio_format != FORMAT_PCM && audio_format != FORMAT_EXTENSIBLE {
        return Err(WavError::UnsupportedAudioFormat(audio_format));
    }
    let channels = u16::from_le_bytes(fields[2..4].try_into().unwrap());
    let sample_rate = u32::from_le_bytes(fields[4..8].try_into().unwrap());
    // byte_rate at 8 and block_align at 12 are derivable, skip them
    let bits_per_sample = u16::from_le_bytes(fields[14..16].try_into().unwrap());

    // The scanner stops on "data", so a recognized file ends its list there
    let data_hdr = subchunks.last().ok_or(WavError::MissingDataChunk)?;
    if &data_hdr.id != b"data" {
        return Err(WavError::MissingDataChunk);
    }

    let start = data_hdr.data_start();
    let end = start + data_hdr.size as usize;
    let raw_data = data.get(start..end).ok_or(WavError::TruncatedPayload {
        needed: end,
        len: data.len(),
    })?;

    Ok(WavAudio {
        audio_format,
        channels,
        sample_rate,
        bits_per_sample,
        raw_data,
    })
}
