use std::io::Cursor;
use std::time::{Duration, Instant};

use crate::audio::AudioClip;
use crate::error::AppError;

pub struct AudioPlayer {
    _stream: rodio::OutputStream,
    handle: rodio::OutputStreamHandle,
    current: Option<Playback>,
}

struct Playback {
    clip: AudioClip,
    sink: rodio::Sink,
    started: Instant,
}

impl AudioPlayer {
    pub fn new() -> Result<Self, AppError> {
        let (stream, handle) = rodio::OutputStream::try_default()
            .map_err(|err| AppError::Audio(format!("Output device error: {err}")))?;
        Ok(Self {
            _stream: stream,
            handle,
            current: None,
        })
    }

    pub fn play(&mut self, clip: &AudioClip) -> Result<(), AppError> {
        self.stop();
        let cursor = Cursor::new(clip.bytes().to_vec());
        let decoder = rodio::Decoder::new(cursor)
            .map_err(|err| AppError::Audio(format!("Decode error: {err}")))?;
        let sink = rodio::Sink::try_new(&self.handle)
            .map_err(|err| AppError::Audio(format!("Audio sink error: {err}")))?;
        sink.append(decoder);
        sink.play();
        self.current = Some(Playback {
            clip: clip.clone(),
            sink,
            started: Instant::now(),
        });
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(playback) = self.current.take() {
            playback.sink.stop();
        }
    }

    pub fn refresh(&mut self) {
        if self
            .current
            .as_ref()
            .is_some_and(|playback| playback.sink.empty())
        {
            self.current = None;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.current
            .as_ref()
            .map(|playback| !playback.sink.empty())
            .unwrap_or(false)
    }

    pub fn is_playing_clip(&self, clip: &AudioClip) -> bool {
        self.current
            .as_ref()
            .is_some_and(|playback| playback.clip.same_audio(clip) && !playback.sink.empty())
    }

    pub fn elapsed(&self) -> Duration {
        self.current
            .as_ref()
            .map(|playback| playback.started.elapsed())
            .unwrap_or_default()
    }

    pub fn progress(&self) -> f32 {
        self.current
            .as_ref()
            .and_then(|playback| {
                playback
                    .clip
                    .duration()
                    .map(|total| playback_fraction(playback.started.elapsed(), total))
            })
            .unwrap_or(0.0)
    }
}

fn playback_fraction(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_is_clamped() {
        let total = Duration::from_secs(4);
        assert_eq!(playback_fraction(Duration::from_secs(1), total), 0.25);
        assert_eq!(playback_fraction(Duration::from_secs(9), total), 1.0);
        assert_eq!(playback_fraction(Duration::ZERO, Duration::ZERO), 1.0);
    }
}
