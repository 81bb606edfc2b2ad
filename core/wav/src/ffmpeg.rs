//! Capture of a piped WAV stream from the external `ffmpeg` transcoder.

use std::path::Path;
use std::process::Command;

use crate::error::{WavError, WavResult};
use crate::reader::read_wav_audio;
use crate::repair::fix_wav_sizes;
use crate::samples::Waveform;

/// Transcode `input` to a WAV byte stream with `ffmpeg -f wav -`.
///
/// ffmpeg writes the container to stdout, and a pipe cannot be seeked
/// back to patch the RIFF sizes, so the captured bytes carry placeholder
/// size fields. They are repaired from the true captured length before
/// the buffer is returned.
pub fn transcode_to_wav(input: &Path) -> WavResult<Vec<u8>> {
    let output = Command::new("ffmpeg")
        .arg("-i")
        .arg(input)
        .args(["-f", "wav", "-"])
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WavError::Transcode {
            status: output.status.to_string(),
            stderr: stderr.lines().last().unwrap_or("").to_string(),
        });
    }

    let mut data = output.stdout;
    fix_wav_sizes(&mut data)?;
    Ok(data)
}

/// Decode `input` into integer samples through the ffmpeg capture path.
pub fn waveform_via_ffmpeg(input: &Path) -> WavResult<Waveform> {
    let data = transcode_to_wav(input)?;
    let audio = read_wav_audio(&data)?;
    Waveform::from_raw(audio.raw_data, audio.bits_per_sample, true)
}

/// Whether an `ffmpeg` binary is reachable on PATH.
pub fn ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .output()
        .is_ok_and(|out| out.status.success())
}
