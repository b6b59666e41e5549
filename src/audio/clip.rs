use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use rodio::{Decoder, Source};

/// Synthesised audio as received from the backend. The bytes are never
/// rewritten; `format` is only what could be learned by probing them.
#[derive(Clone)]
pub struct AudioClip {
    bytes: Arc<Vec<u8>>,
    format: Option<ClipFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration: Option<Duration>,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>) -> Self {
        let format = match probe_wav(&bytes) {
            Ok(format) => Some(format),
            Err(wav_err) => match probe_with_rodio(&bytes) {
                Ok(format) => Some(format),
                Err(err) => {
                    log::warn!("Audio payload not recognised ({wav_err:#}; {err:#})");
                    None
                }
            },
        };
        Self {
            bytes: Arc::new(bytes),
            format,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn format(&self) -> Option<ClipFormat> {
        self.format
    }

    pub fn duration(&self) -> Option<Duration> {
        self.format.and_then(|format| format.duration)
    }

    pub fn is_playable(&self) -> bool {
        self.format.is_some()
    }

    /// True only for clones of the same response, not for equal bytes.
    pub fn same_audio(&self, other: &AudioClip) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }
}

fn probe_wav(bytes: &[u8]) -> Result<ClipFormat> {
    let reader = hound::WavReader::new(Cursor::new(bytes)).context("Failed to parse WAV header")?;
    let spec = reader.spec();
    let frames = reader.duration();
    let duration = (spec.sample_rate > 0)
        .then(|| Duration::from_secs_f64(frames as f64 / spec.sample_rate as f64));
    Ok(ClipFormat {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        duration,
    })
}

fn probe_with_rodio(bytes: &[u8]) -> Result<ClipFormat> {
    let decoder =
        Decoder::new(Cursor::new(bytes.to_vec())).context("Failed to decode audio stream")?;
    Ok(ClipFormat {
        sample_rate: decoder.sample_rate(),
        channels: decoder.channels(),
        duration: decoder.total_duration(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone_wav(sample_rate: u32, frames: u32) -> Vec<u8> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for n in 0..frames {
                let sample = if n % 2 == 0 { 1200i16 } else { -1200i16 };
                writer.write_sample(sample).unwrap();
            }
            writer.finalize().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn wav_header_gives_duration() {
        let wav = tone_wav(24_000, 12_000);
        let clip = AudioClip::new(wav.clone());
        let format = clip.format().unwrap();
        assert_eq!(format.sample_rate, 24_000);
        assert_eq!(format.channels, 1);
        assert_eq!(clip.duration(), Some(Duration::from_millis(500)));
        assert_eq!(clip.bytes(), wav.as_slice());
        assert_eq!(clip.len(), wav.len());
    }

    #[test]
    fn unknown_payload_is_kept_but_not_playable() {
        let clip = AudioClip::new(b"definitely not audio".to_vec());
        assert!(!clip.is_playable());
        assert_eq!(clip.duration(), None);
        assert_eq!(clip.bytes(), b"definitely not audio");
    }

    #[test]
    fn identity_follows_clones_not_contents() {
        let wav = tone_wav(16_000, 160);
        let form = AudioClip::new(wav.clone());
        let api_test = AudioClip::new(wav);
        assert!(form.same_audio(&form.clone()));
        assert!(!form.same_audio(&api_test));
    }

    #[test]
    fn empty_payload() {
        let clip = AudioClip::new(Vec::new());
        assert!(clip.is_empty());
        assert!(!clip.is_playable());
    }
}
