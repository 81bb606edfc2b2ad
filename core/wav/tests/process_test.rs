use std::fs;

use wav::ffmpeg::ffmpeg_available;
use wav::process::{wav_compare, wav_extract, wav_fix};

fn write_test_wav(path: &std::path::Path, samples: &[i16]) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 8000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("Failed to create test WAV");
    for &s in samples {
        writer.write_sample(s).expect("Failed to write sample");
    }
    writer.finalize().expect("Failed to finalize test WAV");
}

#[test]
fn test_fix_file_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let in_path = dir.path().join("zeroed.wav");
    let out_path = dir.path().join("fixed.wav");

    write_test_wav(&in_path, &[1, 2, 3, 4]);

    // Blank out the RIFF size field the way a piped producer leaves it
    let mut data = fs::read(&in_path).unwrap();
    data[4..8].copy_from_slice(&[0u8; 4]);
    fs::write(&in_path, &data).unwrap();

    wav_fix(&in_path, &Some(out_path.clone())).expect("fix failed");

    let fixed = fs::read(&out_path).unwrap();
    let riff_size = u32::from_le_bytes(fixed[4..8].try_into().unwrap());
    assert_eq!(riff_size as usize, fixed.len() - 8);
}

#[test]
fn test_extract_rewrites_payload() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let in_path = dir.path().join("input.wav");
    let out_path = dir.path().join("clean.wav");

    write_test_wav(&in_path, &[1, 2]);
    wav_extract(&in_path, &Some(out_path.clone())).expect("extract failed");

    let mut reader = hound::WavReader::open(&out_path).expect("Failed to open extracted WAV");
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.spec().sample_rate, 8000);
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![1, 2]);
}

#[test]
fn test_compare_pcm_paths_agree() {
    if !ffmpeg_available() {
        println!("Skipping test_compare_pcm_paths_agree: ffmpeg not found on PATH");
        return;
    }

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let in_path = dir.path().join("tone.wav");

    // A short ramp; PCM passes through both decode paths bit-exactly
    let samples: Vec<i16> = (0..800).map(|i| (i % 128) as i16).collect();
    write_test_wav(&in_path, &samples);

    wav_compare(&in_path).expect("waveforms should match for plain PCM");
}
