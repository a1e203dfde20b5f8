//! Shapiro-Wilk reference values.

use normstat_core::{NormalityError, shapiro_wilk};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_reference_samples() {
    let cases: Vec<(Vec<f64>, f64, f64)> = vec![
        ((22..=32).map(f64::from).collect(), 0.968_391, 0.869_84),
        ((1..=12).map(f64::from).collect(), 0.966_90, 0.875_73),
        (
            vec![
                148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0,
            ],
            0.788_81,
            0.006_704,
        ),
        (
            vec![
                4.2, 5.1, 5.5, 5.9, 6.0, 6.2, 6.4, 6.8, 7.1, 7.5, 8.3, 5.0, 6.1, 6.6, 5.7,
            ],
            0.992_60,
            0.999_94,
        ),
        (vec![1.0, 2.0, 3.0, 4.0], 0.992_91, 0.971_88),
    ];

    for (data, statistic, p_value) in cases {
        let result = shapiro_wilk(&data).expect("test runs");
        assert_close(result.statistic, statistic, 1e-4);
        assert_close(result.p_value, p_value, 1e-3);
    }
}

#[test]
fn test_clearly_non_normal_samples() {
    let skewed = [
        1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0, 144.0,
    ];
    let result = shapiro_wilk(&skewed).expect("test runs");
    assert_close(result.statistic, 0.665_15, 1e-4);
    assert!(result.p_value < 0.001);

    let mut outlier: Vec<f64> = (10..=19).map(f64::from).collect();
    outlier.push(500.0);
    let result = shapiro_wilk(&outlier).expect("test runs");
    assert_close(result.statistic, 0.363_47, 1e-4);
    assert!(result.p_value < 1e-6);
}

#[test]
fn test_input_order_does_not_matter() {
    let sorted: Vec<f64> = (22..=32).map(f64::from).collect();
    let shuffled = [
        30.0, 22.0, 27.0, 25.0, 32.0, 24.0, 29.0, 23.0, 31.0, 26.0, 28.0,
    ];
    assert_eq!(
        shapiro_wilk(&sorted).expect("sorted"),
        shapiro_wilk(&shuffled).expect("shuffled")
    );
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(
        shapiro_wilk(&[1.0, 2.0]),
        Err(NormalityError::TooFewObservations { observations: 2 })
    );
    assert_eq!(
        shapiro_wilk(&[1.0, f64::NAN, 3.0, 4.0]),
        Err(NormalityError::NonFinite)
    );
    assert_eq!(
        shapiro_wilk(&[5.0; 12]),
        Err(NormalityError::ZeroRange)
    );
}

#[test]
fn test_range_overflow_is_an_error() {
    let mut data = vec![-1e308, 1e308];
    data.extend((0..9).map(f64::from));
    assert_eq!(shapiro_wilk(&data), Err(NormalityError::RangeOverflow));
}

#[test]
fn test_large_sample_still_computes() {
    // deterministic, roughly bell-shaped: sum of three uniform sequences
    let data: Vec<f64> = (0..6000)
        .map(|i| {
            let a = (i * 37 % 101) as f64;
            let b = (i * 53 % 97) as f64;
            let c = (i * 71 % 89) as f64;
            a + b + c
        })
        .collect();
    let result = shapiro_wilk(&data).expect("test runs");
    assert!(result.statistic > 0.9 && result.statistic <= 1.0);
    assert!((0.0..=1.0).contains(&result.p_value));
}
