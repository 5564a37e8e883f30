use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::constants::chime::{
    NOTES, NOTE_VOLUME, SAMPLE_RATE, SPARKLE, SPARKLE_VOLUME, TARGET_PEAK, TOTAL_DURATION,
};
use crate::synth;

/// Render the notification chime: a cute "ding-ding-ding" music-box
/// arpeggio with a quiet shimmer over the final note, normalized to 0.7.
pub fn render() -> Vec<f32> {
    let total_samples = (SAMPLE_RATE as f32 * TOTAL_DURATION) as usize;
    let mut buffer = vec![0.0f32; total_samples];

    for &(freq, duration, onset) in NOTES.iter() {
        let tone = synth::tone(freq, duration, NOTE_VOLUME);
        synth::mix_at(&mut buffer, &tone, (onset * SAMPLE_RATE as f32) as usize);
    }

    let (freq, duration, onset) = SPARKLE;
    let sparkle = synth::tone(freq, duration, SPARKLE_VOLUME);
    synth::mix_at(&mut buffer, &sparkle, (onset * SAMPLE_RATE as f32) as usize);

    synth::normalize(&mut buffer, TARGET_PEAK);
    buffer
}

/// Write samples as a mono 16-bit PCM WAV at 44100 Hz
pub fn write_wav(path: &Path, samples: &[f32]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file {}", path.display()))?;

    for &sample in samples {
        writer
            .write_sample(synth::to_pcm16(sample))
            .context("Failed to write WAV sample")?;
    }

    writer.finalize().context("Failed to finalize WAV file")?;
    Ok(())
}

/// Render the chime and write it to `path`
pub fn generate(path: &Path) -> Result<()> {
    let samples = render();
    write_wav(path, &samples)?;

    println!("✓ Notification chime saved to {}", path.display());
    println!("  Duration: {}s, Samples: {}", TOTAL_DURATION, samples.len());

    Ok(())
}
