use core::fmt;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use tracing::instrument;

use crate::{AdcCode, RateChange};

/// Everything extracted from one log: the readings in acquisition order
/// and the places where the source declared a new sampling rate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdcLog {
    pub samples: Vec<AdcCode>,
    pub rate_changes: Vec<RateChange>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read adc log: {0}")]
    Io(#[from] std::io::Error),
    #[error(
        "Rate declaration on line {line} does not have a valid \
        integer rate in front of the colon: {source}"
    )]
    BadRate {
        line: usize,
        source: ParseIntError,
    },
}

impl AdcLog {
    /// Reads the whole log into memory and parses it.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file can not be read and
    /// [`Error::BadRate`] if a rate declaration line carries a rate
    /// that is not an integer.
    #[instrument]
    pub fn read(path: impl AsRef<Path> + fmt::Debug) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }
}

impl FromStr for AdcLog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut samples = Vec::new();
        let mut rate_changes = Vec::new();

        for (nr, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.contains("Hz:") {
                let (rate_part, values) = line
                    .split_once(':')
                    .expect("line contains `Hz:` so there is a colon");
                let rate = rate_part
                    .replace("Hz", "")
                    .trim()
                    .parse()
                    .map_err(|source| Error::BadRate {
                        line: nr + 1,
                        source,
                    })?;
                tracing::debug!(line = nr + 1, rate, "detected sampling rate declaration");
                rate_changes.push(RateChange {
                    starts_at: samples.len(),
                    rate,
                });
                push_readings(values, &mut samples);
            } else {
                push_readings(line, &mut samples);
            }
        }

        tracing::info!(
            samples = samples.len(),
            rate_changes = rate_changes.len(),
            "parsed adc log"
        );
        Ok(AdcLog {
            samples,
            rate_changes,
        })
    }
}

/// Appends every token that is a pure digit sequence. Anything else,
/// signed or fractional numbers included, is dropped without notice.
fn push_readings(part: &str, samples: &mut Vec<AdcCode>) {
    let readings = part
        .split_whitespace()
        .filter(|token| token.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|token| token.parse::<AdcCode>().ok());
    samples.extend(readings);
}
