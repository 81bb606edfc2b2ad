//! RIFF chunk list traversal.

use crate::types::WavSubChunk;

/// Bytes occupied by the RIFF descriptor ("RIFF" + size + "WAVE").
pub const RIFF_DESCRIPTOR_LEN: usize = 12;
/// Bytes in a chunk header: 4-byte tag + 4-byte little-endian size.
pub const CHUNK_HEADER_LEN: usize = 8;
/// Upper bound on recorded chunks. Keeps a forged chunk list from driving
/// the cursor through an arbitrary amount of hostile input.
pub const MAX_SUBCHUNKS: usize = 10;

/// Walk the chunk list starting right after the RIFF descriptor.
///
/// Stops at the first `data` chunk, at the first incomplete header, or
/// after [`MAX_SUBCHUNKS`] entries. A declared size that overshoots the
/// buffer is recorded as-is; it only fails at the point the chunk is read.
/// Chunk sizes are taken literally, with no padding to an even boundary.
pub fn extract_subchunks(data: &[u8]) -> Vec<WavSubChunk> {
    let mut pos = RIFF_DESCRIPTOR_LEN;
    let mut subchunks = Vec::new();

    while pos + CHUNK_HEADER_LEN <= data.len() && subchunks.len() < MAX_SUBCHUNKS {
        let mut id = [0u8; 4];
        id.copy_from_slice(&data[pos..pos + 4]);
        let size = u32::from_le_bytes(data[pos + 4..pos + 8].try_into().unwrap());

        subchunks.push(WavSubChunk { id, position: pos, size });
        if &id == b"data" {
            // "data" is the last subchunk
            break;
        }
        pos += CHUNK_HEADER_LEN + size as usize;
    }

    subchunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(id: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(id);
        out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        out.extend_from_slice(payload);
        out
    }

    fn riff(body: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(body);
        out
    }

    #[test]
    fn test_scan_fmt_then_data() {
        let mut body = chunk(b"fmt ", &[0u8; 16]);
        body.extend_from_slice(&chunk(b"data", &[1, 2, 3, 4]));
        let data = riff(&body);

        let subchunks = extract_subchunks(&data);
        assert_eq!(subchunks.len(), 2);
        assert_eq!(&subchunks[0].id, b"fmt ");
        assert_eq!(subchunks[0].position, 12);
        assert_eq!(subchunks[0].size, 16);
        assert_eq!(&subchunks[1].id, b"data");
        assert_eq!(subchunks[1].position, 12 + 8 + 16);
        assert_eq!(subchunks[1].size, 4);
    }

    #[test]
    fn test_scan_stops_at_data() {
        let mut body = chunk(b"data", &[0u8; 4]);
        body.extend_from_slice(&chunk(b"fmt ", &[0u8; 16]));
        let data = riff(&body);

        let subchunks = extract_subchunks(&data);
        assert_eq!(subchunks.len(), 1);
        assert_eq!(&subchunks[0].id, b"data");
    }

    #[test]
    fn test_scan_caps_chunk_count() {
        let mut body = Vec::new();
        for _ in 0..32 {
            body.extend_from_slice(&chunk(b"JUNK", &[]));
        }
        let data = riff(&body);

        let subchunks = extract_subchunks(&data);
        assert_eq!(subchunks.len(), MAX_SUBCHUNKS);
    }

    #[test]
    fn test_scan_ignores_incomplete_header() {
        let mut body = chunk(b"fmt ", &[0u8; 16]);
        // Tag but only three size bytes
        body.extend_from_slice(b"dat");
        let data = riff(&body);

        let subchunks = extract_subchunks(&data);
        assert_eq!(subchunks.len(), 1);
        assert_eq!(&subchunks[0].id, b"fmt ");
    }

    #[test]
    fn test_scan_empty_and_header_only() {
        assert!(extract_subchunks(&[]).is_empty());
        assert!(extract_subchunks(&[0u8; 12]).is_empty());
    }

    #[test]
    fn test_scan_records_oversized_chunk() {
        let mut data = riff(&[]);
        data.extend_from_slice(b"LIST");
        data.extend_from_slice(&u32::MAX.to_le_bytes());

        let subchunks = extract_subchunks(&data);
        assert_eq!(subchunks.len(), 1);
        assert_eq!(subchunks[0].size, u32::MAX);
    }
}
