//! Moving-average smoothing.

/// Centered moving average in valid-only mode.
///
/// Each output value averages `window` consecutive inputs, so the output is
/// `window - 1` samples shorter than the input. Inputs shorter than the
/// window (or a zero window) produce an empty output.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }

    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_output_is_window_minus_one_shorter() {
        let values: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(moving_average(&values, 7).len(), 14);
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let values = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(moving_average(&values, 1), values);
    }

    #[test]
    fn test_constant_input_stays_constant() {
        let smoothed = moving_average(&[250.0; 30], 7);
        assert_eq!(smoothed.len(), 24);
        assert!(smoothed.iter().all(|&v| (v - 250.0).abs() < 1e-9));
    }

    #[test]
    fn test_short_input_yields_empty() {
        assert!(moving_average(&[1.0, 2.0, 3.0], 7).is_empty());
        assert!(moving_average(&[], 7).is_empty());
        assert!(moving_average(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_known_window() {
        let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0], 3);
        assert_eq!(smoothed, vec![2.0, 3.0]);
    }

    proptest! {
        #[test]
        fn smoothed_values_stay_within_input_bounds(
            values in proptest::collection::vec(0.0f64..1000.0, 7..64)
        ) {
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            for v in moving_average(&values, 7) {
                prop_assert!(v >= min - 1e-9 && v <= max + 1e-9);
            }
        }
    }
}
