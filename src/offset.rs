use num_traits::ToPrimitive;

use crate::AdcCode;

#[derive(Debug, thiserror::Error)]
#[error("Can not remove the dc offset of an empty sample sequence, the mean is undefined")]
pub struct EmptyInput;

/// Subtracts the arithmetic mean from every reading. The result is
/// centered around zero, order and length stay untouched.
///
/// # Errors
/// Returns [`EmptyInput`] if there are no samples.
pub fn remove_dc_offset(samples: Vec<AdcCode>) -> Result<Vec<f64>, EmptyInput> {
    let offset = mean(&samples).ok_or(EmptyInput)?;
    tracing::debug!(offset, "removing dc offset");
    Ok(samples
        .into_iter()
        .map(|sample| sample as f64 - offset)
        .collect())
}

fn mean<T: ToPrimitive>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values
        .iter()
        .map(|v| v.to_f64().expect("adc readings fit an f64"))
        .sum();
    Some(sum / values.len() as f64)
}
