//! Sound bank behind the game's cues

use std::path::Path;

use macroquad::audio::{self, PlaySoundParams, Sound, load_sound, load_sound_from_bytes};
use tracing::info;

use crate::error::GameError;
use crate::game::{Cue, CueSink};

const SAMPLE_RATE: u32 = 44_100;

/// One tone per cue: (frequency Hz, duration s, loudness)
fn tone_for(cue: Cue) -> (f32, f32, f32) {
    match cue {
        Cue::Move => (440.0, 0.03, 0.25),
        Cue::Eat => (880.0, 0.08, 0.6),
        Cue::Wall => (110.0, 0.25, 0.7),
    }
}

fn file_for(cue: Cue) -> &'static str {
    match cue {
        Cue::Move => "move.wav",
        Cue::Eat => "eat.wav",
        Cue::Wall => "wall.wav",
    }
}

// Mono 16-bit PCM
const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 16;
const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;
const BYTE_RATE: u32 = SAMPLE_RATE * BLOCK_ALIGN as u32;
const PCM_FORMAT: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;
const WAV_HEADER_LEN: usize = 44;
/// Headroom below full scale
const PEAK: f32 = 0.7;

/// Sine samples at `frequency` Hz for `duration` seconds, scaled by `loudness`
fn sine_samples(frequency: f32, duration: f32, loudness: f32) -> Vec<i16> {
    let count = (duration * SAMPLE_RATE as f32) as usize;
    let amplitude = loudness.clamp(0.0, 1.0) * PEAK * i16::MAX as f32;
    (0..count)
        .map(|n| {
            let phase = std::f32::consts::TAU * frequency * n as f32 / SAMPLE_RATE as f32;
            (amplitude * phase.sin()) as i16
        })
        .collect()
}

/// Wrap samples in a RIFF/WAVE container macroquad can decode
fn encode_wav(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * BLOCK_ALIGN as usize) as u32;
    let riff_len = (WAV_HEADER_LEN - 8) as u32 + data_len;

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + data_len as usize);
    wav.extend_from_slice(b"RIFF");
    wav.extend(riff_len.to_le_bytes());
    wav.extend_from_slice(b"WAVEfmt ");
    wav.extend(FMT_CHUNK_LEN.to_le_bytes());
    wav.extend(PCM_FORMAT.to_le_bytes());
    wav.extend(CHANNELS.to_le_bytes());
    wav.extend(SAMPLE_RATE.to_le_bytes());
    wav.extend(BYTE_RATE.to_le_bytes());
    wav.extend(BLOCK_ALIGN.to_le_bytes());
    wav.extend(BITS_PER_SAMPLE.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend(data_len.to_le_bytes());
    wav.extend(samples.iter().flat_map(|sample| sample.to_le_bytes()));
    wav
}

/// WAV bytes for the tone played on `cue`
pub fn tone_wav(cue: Cue) -> Vec<u8> {
    let (frequency, duration, loudness) = tone_for(cue);
    encode_wav(&sine_samples(frequency, duration, loudness))
}

/// Loaded sounds, one per cue. Dropping the bank releases them.
pub struct Sounds {
    move_sound: Sound,
    eat_sound: Sound,
    wall_sound: Sound,
    volume: f32,
}

impl Sounds {
    /// Load `move.wav`, `eat.wav` and `wall.wav` from `dir`, or synthesize
    /// tones when no directory is given.
    pub async fn load(dir: Option<&Path>, volume: f32) -> Result<Self, GameError> {
        let sounds = Self {
            move_sound: Self::load_one(Cue::Move, dir).await?,
            eat_sound: Self::load_one(Cue::Eat, dir).await?,
            wall_sound: Self::load_one(Cue::Wall, dir).await?,
            volume: volume.clamp(0.0, 1.0),
        };
        match dir {
            Some(dir) => info!("Loaded sounds from {}", dir.display()),
            None => info!("Using synthesized sounds"),
        }
        Ok(sounds)
    }

    async fn load_one(cue: Cue, dir: Option<&Path>) -> Result<Sound, GameError> {
        let loaded = match dir {
            Some(dir) => {
                let path = dir.join(file_for(cue));
                load_sound(&path.to_string_lossy()).await
            }
            None => load_sound_from_bytes(&tone_wav(cue)).await,
        };
        loaded.map_err(|err| GameError::Sound {
            cue,
            reason: format!("{err:?}"),
        })
    }

    fn sound(&self, cue: Cue) -> &Sound {
        match cue {
            Cue::Move => &self.move_sound,
            Cue::Eat => &self.eat_sound,
            Cue::Wall => &self.wall_sound,
        }
    }
}

impl CueSink for Sounds {
    fn play(&mut self, cue: Cue) {
        audio::play_sound(
            self.sound(cue),
            PlaySoundParams {
                looped: false,
                volume: self.volume,
            },
        );
    }
}
