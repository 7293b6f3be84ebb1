//! Turns text logs of raw ADC readings into mono 16 bit PCM wav files.
//!
//! The log format is whitespace separated integer readings, optionally
//! interrupted by lines such as `8000Hz: 12 13 14` that declare a new
//! sampling rate for everything that follows. Conversion removes the DC
//! offset, rescales the readings to the 16 bit PCM range and writes them
//! out at the rate that was declared most often.

pub mod convert;
pub mod offset;
pub mod parse;
pub mod rate;
pub mod scale;
pub mod wav;

pub use convert::{Converter, Error, Summary};
pub use parse::AdcLog;
pub use rate::RateChange;

/// One raw reading as it appears in the log.
pub type AdcCode = u64;
