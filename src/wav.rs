use core::fmt;
use std::path::Path;

use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not create the waveform file: {0}")]
    Create(hound::Error),
    #[error("Could not append a sample to the waveform file: {0}")]
    WriteSample(hound::Error),
    #[error("Could not finalize the waveform header: {0}")]
    Finalize(hound::Error),
}

/// Writes the samples as a mono 16 bit little endian PCM wav file.
///
/// Values outside the 16 bit range are clamped to the nearest bound,
/// one sample becomes one frame.
///
/// # Errors
/// Any failure wraps the underlying [`hound::Error`], mostly io issues
/// such as a full disk or a missing directory. A partially written file
/// may remain on disk after an error.
#[instrument(skip(samples), fields(frames = samples.len()))]
pub fn write_mono(
    path: impl AsRef<Path> + fmt::Debug,
    samples: &[i32],
    sample_rate: u32,
) -> Result<(), Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(Error::Create)?;
    for &sample in samples {
        let clamped = sample.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16;
        writer.write_sample(clamped).map_err(Error::WriteSample)?;
    }
    writer.finalize().map_err(Error::Finalize)
}
