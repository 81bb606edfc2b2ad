//! Independent decode path used to cross-check the container core.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{WavError, WavResult};
use crate::samples::Waveform;

/// Decode `input` with symphonia, bypassing the RIFF core entirely.
///
/// Samples come back interleaved as signed 16-bit integers, which is what
/// the ffmpeg capture path produces for the same inputs.
pub fn waveform_via_symphonia(input: &Path) -> WavResult<Waveform> {
    let file = File::open(input)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = input.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| WavError::decode(e.to_string()))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| WavError::decode("no decodable track found"))?;

    let dec_opts: DecoderOptions = Default::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(|e| WavError::decode(e.to_string()))?;

    let track_id = track.id;

    let mut samples = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(WavError::decode(e.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => append_interleaved(&decoded, &mut samples)?,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(WavError::decode(e.to_string())),
        }
    }

    Ok(Waveform::I16(samples))
}

fn append_interleaved(decoded: &AudioBufferRef<'_>, samples: &mut Vec<i16>) -> WavResult<()> {
    match decoded {
        AudioBufferRef::F32(buf) => {
            for frame in 0..buf.frames() {
                for channel in 0..buf.spec().channels.count() {
                    let sample = buf.chan(channel)[frame];
                    samples.push((sample * i16::MAX as f32) as i16);
                }
            }
        }
        AudioBufferRef::S16(buf) => {
            for frame in 0..buf.frames() {
                for channel in 0..buf.spec().channels.count() {
                    samples.push(buf.chan(channel)[frame]);
                }
            }
        }
        AudioBufferRef::S32(buf) => {
            for frame in 0..buf.frames() {
                for channel in 0..buf.spec().channels.count() {
                    samples.push((buf.chan(channel)[frame] >> 16) as i16);
                }
            }
        }
        _ => return Err(WavError::decode("unsupported decoded sample layout")),
    }
    Ok(())
}
