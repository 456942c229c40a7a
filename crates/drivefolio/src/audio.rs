//! Synthesized audio cues.
//!
//! The section and reset chimes are short sine sweeps generated at startup as
//! in-memory WAV assets, so no audio files ship with the binary.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::vehicle::VehicleReset;
use crate::world::SectionEntered;

/// Sample rate for the synthesized cues.
const SAMPLE_RATE: u32 = 44_100;

/// Plugin for the audio cues.
pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_cues)
            .add_systems(Update, (play_section_cue, play_reset_cue));
    }
}

/// Handles for the synthesized cue assets.
#[derive(Resource)]
struct UiCues {
    section: Handle<AudioSource>,
    reset: Handle<AudioSource>,
}

fn setup_cues(mut commands: Commands, mut audio_assets: ResMut<Assets<AudioSource>>) {
    // Rising chirp for section entry, low thud-sweep for reset.
    let section = audio_assets.add(synth_sweep(400.0, 600.0, 0.1));
    let reset = audio_assets.add(synth_sweep(100.0, 300.0, 0.3));
    commands.insert_resource(UiCues { section, reset });
}

fn play_section_cue(
    mut entered: MessageReader<SectionEntered>,
    cues: Res<UiCues>,
    mut commands: Commands,
) {
    for _ in entered.read() {
        commands.spawn((
            AudioPlayer::new(cues.section.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(0.5)),
        ));
    }
}

fn play_reset_cue(
    mut resets: MessageReader<VehicleReset>,
    cues: Res<UiCues>,
    mut commands: Commands,
) {
    for _ in resets.read() {
        commands.spawn((
            AudioPlayer::new(cues.reset.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(0.6)),
        ));
    }
}

/// Synthesize a mono 16-bit sine sweep from `start_hz` to `end_hz` over
/// `duration` seconds, with an exponential fade-out.
fn synth_sweep(start_hz: f32, end_hz: f32, duration: f32) -> AudioSource {
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let sample_count = (duration * SAMPLE_RATE as f32) as usize;
    let mut samples = Vec::with_capacity(sample_count);

    let mut phase = 0.0_f32;
    for i in 0..sample_count {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f32 / sample_count as f32;
        let freq = start_hz + (end_hz - start_hz) * t;
        phase += std::f32::consts::TAU * freq / SAMPLE_RATE as f32;
        let gain = (-4.0 * t).exp();
        #[allow(clippy::cast_possible_truncation)]
        samples.push((phase.sin() * gain * f32::from(i16::MAX) * 0.8) as i16);
    }

    AudioSource {
        bytes: encode_wav(&samples).into(),
    }
}

/// Encode mono 16-bit PCM samples as a WAV byte stream.
fn encode_wav(samples: &[i16]) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let byte_rate = SAMPLE_RATE * 2;
    let mut bytes = Vec::with_capacity(44 + samples.len() * 2);

    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16_u32.to_le_bytes()); // chunk size
    bytes.extend_from_slice(&1_u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1_u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    bytes.extend_from_slice(&byte_rate.to_le_bytes());
    bytes.extend_from_slice(&2_u16.to_le_bytes()); // block align
    bytes.extend_from_slice(&16_u16.to_le_bytes()); // bits per sample

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_header_describes_the_payload() {
        let samples = [0_i16, 1000, -1000, 0];
        let bytes = encode_wav(&samples);

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(bytes.len(), 44 + samples.len() * 2);
        let data_len = u32::from_le_bytes(bytes[40..44].try_into().unwrap());
        assert_eq!(data_len as usize, samples.len() * 2);
    }

    #[test]
    fn sweep_fades_out() {
        let source = synth_sweep(400.0, 600.0, 0.1);
        let data = &source.bytes[44..];
        let sample_at = |i: usize| {
            i16::from_le_bytes([data[i * 2], data[i * 2 + 1]])
        };

        let n = data.len() / 2;
        let early_peak = (0..n / 10).map(|i| sample_at(i).unsigned_abs()).max();
        let late_peak = (n - n / 10..n).map(|i| sample_at(i).unsigned_abs()).max();
        assert!(early_peak > late_peak);
    }
}
