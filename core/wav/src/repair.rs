//! In-place repair of placeholder RIFF size fields.

use crate::error::{WavError, WavResult};
use crate::scanner::{CHUNK_HEADER_LEN, extract_subchunks};

/// Compute the RIFF-descriptor size field for a buffer of `len` bytes.
///
/// The field stores everything after the 8-byte RIFF chunk header, so the
/// longest encodable buffer is `u32::MAX + 8` bytes.
pub fn riff_chunk_size(len: u64) -> WavResult<u32> {
    let payload = len.saturating_sub(CHUNK_HEADER_LEN as u64);
    u32::try_from(payload).map_err(|_| WavError::FileTooLarge { len })
}

/// Rewrite the RIFF and `data` size fields from the buffer's true length.
///
/// A producer streaming WAV to a pipe cannot seek back to patch these
/// fields, so they arrive as zeros or junk. If the buffer does not scan as
/// a chunk list ending in `data`, nothing is written and the call
/// succeeds: an unrecognized file has nothing to fix.
///
/// Idempotent, since both fields are recomputed from `data.len()` on every
/// call. The length check precedes both writes, so a [`WavError::FileTooLarge`]
/// failure leaves the buffer untouched. Never reallocates.
pub fn fix_wav_sizes(data: &mut [u8]) -> WavResult<()> {
    let subchunks = extract_subchunks(data);
    let Some(last) = subchunks.last() else {
        return Ok(());
    };
    if &last.id != b"data" {
        return Ok(());
    }

    let riff_size = riff_chunk_size(data.len() as u64)?;
    let data_size = (data.len() - last.position - CHUNK_HEADER_LEN) as u32;

    // File size in the RIFF chunk descriptor
    data[4..8].copy_from_slice(&riff_size.to_le_bytes());

    // Data size in the data subchunk
    let pos = last.position + 4;
    data[pos..pos + 4].copy_from_slice(&data_size.to_le_bytes());

    Ok(())
}
