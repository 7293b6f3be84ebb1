use itertools::Itertools;

/// Marks that the log declared a new sampling rate in Hz starting at
/// sample index `starts_at`. Recorded in file order, `starts_at` never
/// decreases between consecutive changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateChange {
    pub starts_at: usize,
    pub rate: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("The log declared no sampling rate")]
pub struct NoRateData;

/// Picks the rate that was declared most often.
///
/// Note this counts declarations, not the samples each declaration
/// covers. A single long 8 kHz stretch loses against two one-line
/// 44.1 kHz bursts. Ties fall to whichever value the count map yields
/// first.
///
/// # Errors
/// Returns [`NoRateData`] if there are no rate changes, the caller
/// decides on a fallback.
pub fn most_common_rate(changes: &[RateChange]) -> Result<u32, NoRateData> {
    changes
        .iter()
        .map(|change| change.rate)
        .counts()
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(rate, _)| rate)
        .ok_or(NoRateData)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(starts_at: usize, rate: u32) -> RateChange {
        RateChange { starts_at, rate }
    }

    #[test]
    fn most_declarations_wins() {
        let changes = [change(0, 44100), change(10, 8000), change(20, 44100)];
        assert_eq!(most_common_rate(&changes).unwrap(), 44100);
    }

    #[test]
    fn coverage_does_not_matter() {
        // one declaration covering thousands of samples still loses
        let changes = [change(0, 8000), change(5000, 44100), change(5001, 44100)];
        assert_eq!(most_common_rate(&changes).unwrap(), 44100);
    }

    #[test]
    fn no_changes_is_an_error() {
        assert!(most_common_rate(&[]).is_err());
    }
}
