use anyhow::{Context, Result};
use byteorder::{LE, ReadBytesExt};
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use crate::ffmpeg::waveform_via_ffmpeg;
use crate::reader::read_wav_audio_with;
use crate::reference::waveform_via_symphonia;
use crate::repair::fix_wav_sizes;
use crate::samples::Waveform;
use crate::scanner::extract_subchunks;
use crate::types::{ChunkEntry, ProbeReport};

/// Validate the 12-byte RIFF descriptor the subchunk scanner assumes is
/// present, returning the declared file size field.
fn read_riff_descriptor(data: &[u8]) -> Result<u32> {
    let mut reader = Cursor::new(data);

    let mut tag = [0u8; 4];
    reader
        .read_exact(&mut tag)
        .context("File shorter than a RIFF descriptor")?;
    if &tag != b"RIFF" {
        anyhow::bail!("Not a RIFF file: leading tag {:?}", tag);
    }

    let declared = reader.read_u32::<LE>()?;

    let mut form = [0u8; 4];
    reader.read_exact(&mut form)?;
    if &form != b"WAVE" {
        anyhow::bail!("RIFF form is not WAVE: {:?}", form);
    }

    Ok(declared)
}

pub fn wav_probe(input: &Path, json: bool) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read {:?}", input))?;
    let declared = read_riff_descriptor(&data)?;

    let subchunks = extract_subchunks(&data);
    let audio = read_wav_audio_with(&data, &subchunks)?;

    let report = ProbeReport {
        audio_format: audio.audio_format,
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: audio.bits_per_sample,
        data_bytes: audio.raw_data.len(),
        chunks: subchunks
            .iter()
            .map(|c| ChunkEntry {
                id: String::from_utf8_lossy(&c.id).into_owned(),
                position: c.position,
                size: c.size,
            })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Format {:#06X}: {} ch, {} Hz, {} bit",
        report.audio_format, report.channels, report.sample_rate, report.bits_per_sample
    );
    println!(
        "RIFF declares {} bytes, file holds {}",
        declared,
        data.len()
    );
    for chunk in &report.chunks {
        println!("  {:4} @ {:>8}  {} bytes", chunk.id, chunk.position, chunk.size);
    }
    println!("Payload: {} bytes", report.data_bytes);

    Ok(())
}

pub fn wav_fix(input: &Path, output: &Option<PathBuf>) -> Result<()> {
    let mut data = fs::read(input).with_context(|| format!("Failed to read {:?}", input))?;
    fix_wav_sizes(&mut data)?;

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("fixed.wav"),
    };

    fs::write(&out_path, &data).with_context(|| format!("Failed to write {:?}", out_path))?;
    println!("Fixed sizes -> {:?}", out_path);
    Ok(())
}

pub fn wav_extract(input: &Path, output: &Option<PathBuf>) -> Result<()> {
    let data = fs::read(input).with_context(|| format!("Failed to read {:?}", input))?;
    let subchunks = extract_subchunks(&data);
    let audio = read_wav_audio_with(&data, &subchunks)?;
    let wave = Waveform::from_raw(audio.raw_data, audio.bits_per_sample, true)?;

    let out_path = match output {
        Some(p) => p.clone(),
        None => input.with_extension("extracted.wav"),
    };

    let spec = hound::WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: audio.bits_per_sample,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&out_path, spec)
        .with_context(|| format!("Failed to create {:?}", out_path))?;

    match &wave {
        Waveform::I8(samples) => {
            for &s in samples {
                writer.write_sample(s)?;
            }
        }
        Waveform::I16(samples) => {
            for &s in samples {
                writer.write_sample(s)?;
            }
        }
        Waveform::I32(samples) => {
            for &s in samples {
                writer.write_sample(s)?;
            }
        }
        // from_raw was called with signed=true above
        _ => anyhow::bail!("unsigned payload cannot be re-emitted"),
    }
    writer.finalize()?;

    println!("Extracted {} samples -> {:?}", wave.len(), out_path);
    Ok(())
}

pub fn wav_compare(input: &Path) -> Result<()> {
    println!("Decoding {:?} via ffmpeg capture...", input);
    let captured = waveform_via_ffmpeg(input)?;
    println!("  {} samples", captured.len());

    println!("Decoding {:?} via symphonia...", input);
    let reference = waveform_via_symphonia(input)?;
    println!("  {} samples", reference.len());

    let a = captured.to_i64s();
    let b = reference.to_i64s();
    if a == b {
        println!("Waveforms match ({} samples).", a.len());
        return Ok(());
    }

    match a.iter().zip(&b).position(|(x, y)| x != y) {
        Some(i) => anyhow::bail!("waveforms diverge at sample {}: {} vs {}", i, a[i], b[i]),
        None => anyhow::bail!("waveform lengths differ: {} vs {}", a.len(), b.len()),
    }
}
