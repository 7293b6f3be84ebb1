use core::fmt;
use std::path::Path;

use tracing::instrument;

use crate::{offset, parse, rate, scale, wav, AdcCode, AdcLog};

/// Used when the log never declares a rate itself.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Full scale code of a 10 bit converter.
pub const DEFAULT_MAX_ADC: AdcCode = 1023;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not parse the adc log: {0}")]
    Parse(#[from] parse::Error),
    #[error("Log contains no samples: {0}")]
    EmptyLog(#[from] offset::EmptyInput),
    #[error("No rate to write the waveform at: {0}")]
    NoRate(#[from] rate::NoRateData),
    #[error("Could not write the waveform: {0}")]
    Write(#[from] wav::Error),
}

/// What ended up in the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub frames: usize,
    pub sample_rate: u32,
}

/// The whole pipeline: parse, remove the dc offset, rescale to 16 bit
/// and encode at the most frequently declared rate.
#[derive(Debug, Clone)]
pub struct Converter {
    max_adc_value: AdcCode,
    fallback_rate: Option<u32>,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            max_adc_value: DEFAULT_MAX_ADC,
            fallback_rate: Some(DEFAULT_SAMPLE_RATE),
        }
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full scale code of the recording converter, 1023 unless changed.
    #[must_use]
    pub fn max_adc_value(mut self, max: AdcCode) -> Self {
        self.max_adc_value = max;
        self
    }

    /// Rate to use when the log declares none. Pass `None` to turn a
    /// missing declaration into [`Error::NoRate`] instead.
    #[must_use]
    pub fn fallback_rate(mut self, rate: Option<u32>) -> Self {
        self.fallback_rate = rate;
        self
    }

    /// Converts one log file into one wav file.
    ///
    /// # Errors
    ///
    /// See the [`Error`] docs, one variant per pipeline stage. Every
    /// error aborts the conversion, though the encoder may already have
    /// created a partial file at `dest`.
    #[instrument(skip(self))]
    pub fn convert(
        &self,
        source: impl AsRef<Path> + fmt::Debug,
        dest: impl AsRef<Path> + fmt::Debug,
    ) -> Result<Summary, Error> {
        let AdcLog {
            samples,
            rate_changes,
        } = AdcLog::read(source)?;

        let centered = offset::remove_dc_offset(samples)?;
        let pcm = scale::to_pcm_range(centered, self.max_adc_value);

        let sample_rate = match rate::most_common_rate(&rate_changes) {
            Ok(rate) => rate,
            Err(no_data) => match self.fallback_rate {
                Some(fallback) => {
                    tracing::debug!(fallback, "log declared no rate, using the fallback");
                    fallback
                }
                None => return Err(Error::NoRate(no_data)),
            },
        };
        tracing::info!(sample_rate, frames = pcm.len(), "writing waveform");

        wav::write_mono(dest, &pcm, sample_rate)?;
        Ok(Summary {
            frames: pcm.len(),
            sample_rate,
        })
    }
}
