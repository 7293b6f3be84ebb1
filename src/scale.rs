use crate::AdcCode;

/// Maps the adc code range `[0, max_adc]` onto the full 16 bit PCM range,
/// truncating towards zero.
///
/// The input comes out of [`remove_dc_offset`](crate::offset::remove_dc_offset)
/// and is centered around zero, not around `max_adc / 2`. The mapping is
/// applied to it unchanged, so the realized output only spans about half
/// of full scale. That matches the recorders this was built for, do not
/// recenter here without checking existing captures.
pub fn to_pcm_range(samples: Vec<f64>, max_adc: AdcCode) -> Vec<i32> {
    samples
        .into_iter()
        .map(|v| ((v / max_adc as f64) * f64::from(u16::MAX) + f64::from(i16::MIN)) as i32)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, -32768)]
    #[case(1023.0, 32767)]
    #[case(-1.0, -32832)]
    #[case(511.5, 0)]
    fn matches_the_affine_map(#[case] input: f64, #[case] expected: i32) {
        assert_eq!(to_pcm_range(vec![input], 1023), vec![expected]);
    }

    #[test]
    fn truncates_towards_zero() {
        // 511.49 maps to -1.14, flooring would give -2
        let mapped = to_pcm_range(vec![511.51, 511.49], 1023);
        assert_eq!(mapped, vec![0, -1]);
    }

    #[test]
    fn is_monotone() {
        let inputs: Vec<f64> = (-600..600).map(|v| v as f64 * 0.9).collect();
        let mapped = to_pcm_range(inputs, 1023);
        assert!(mapped.windows(2).all(|w| w[0] <= w[1]));
    }
}
