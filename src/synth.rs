use std::f32::consts::PI;

use crate::constants::chime::{ATTACK_DURATION, SAMPLE_RATE};

/// Generate a sine tone with soft harmonics and a pluck-style envelope.
///
/// The fundamental is layered with 0.3x the 2nd harmonic and 0.15x the 3rd
/// for warmth, shaped by a square-root decay and a 5ms linear attack, then
/// scaled by `volume` and clamped to [-1, 1].
pub fn tone(freq: f32, duration: f32, volume: f32) -> Vec<f32> {
    let n_samples = (SAMPLE_RATE as f32 * duration) as usize;
    let attack_samples = (SAMPLE_RATE as f32 * ATTACK_DURATION) as usize;
    let mut samples = Vec::with_capacity(n_samples);

    for i in 0..n_samples {
        let t = i as f32 / SAMPLE_RATE as f32;

        let mut val = (2.0 * PI * freq * t).sin();
        val += 0.3 * (2.0 * PI * freq * 2.0 * t).sin();
        val += 0.15 * (2.0 * PI * freq * 3.0 * t).sin();

        let mut envelope = (1.0 - (i as f32 / n_samples as f32).sqrt()).max(0.0);
        if i < attack_samples {
            envelope *= i as f32 / attack_samples as f32;
        }

        val *= envelope * volume;
        samples.push(val.clamp(-1.0, 1.0));
    }

    samples
}

/// Add a tone into the master buffer starting at `offset` samples,
/// dropping anything past the end of the buffer.
pub fn mix_at(buffer: &mut [f32], tone: &[f32], offset: usize) {
    for (i, &s) in tone.iter().enumerate() {
        let idx = offset + i;
        if idx >= buffer.len() {
            break;
        }
        buffer[idx] += s;
    }
}

/// Scale the buffer so its peak absolute value equals `target_peak`.
/// A silent buffer is left untouched.
pub fn normalize(buffer: &mut [f32], target_peak: f32) {
    let peak = buffer.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()));
    let peak = if peak == 0.0 { 1.0 } else { peak };

    for s in buffer.iter_mut() {
        *s = *s / peak * target_peak;
    }
}

/// Convert a normalized sample to 16-bit PCM, truncating toward zero
pub fn to_pcm16(sample: f32) -> i16 {
    (sample * 32767.0).clamp(i16::MIN as f32, i16::MAX as f32) as i16
}
