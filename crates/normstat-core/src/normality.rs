//! Shapiro-Wilk normality test.
//!
//! Implements algorithm AS R94 (Royston 1995): approximate coefficients from
//! normal order statistics, the W statistic, and a p-value from Royston's
//! normalizing transformation of `ln(1 - W)`.
//!
//! Reference: Royston, P. (1995). "Remark AS R94: A remark on algorithm
//! AS 181: The W-test for normality", Applied Statistics 44(4), 547-551.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use normstat_model::NormalityTest;
use statrs::distribution::{ContinuousCDF, Normal};
use thiserror::Error;

/// Samples above this size get a less accurate p-value.
pub const MAX_ACCURATE_SAMPLE: usize = 5000;

const SMALL: f64 = 1e-19;

// Polynomial coefficients from AS R94.
const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

/// Reasons the test cannot be computed. The `Display` text is what a report
/// shows for the failing column.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NormalityError {
    #[error("data must be at least length 3")]
    TooFewObservations { observations: usize },
    #[error("data contains non-finite values")]
    NonFinite,
    #[error("data has zero range; all values are identical")]
    ZeroRange,
    #[error("data range is too large to represent")]
    RangeOverflow,
    #[error("test statistic is undefined for this data")]
    UndefinedStatistic,
    #[error("normal distribution unavailable: {0}")]
    Distribution(String),
}

/// Runs the Shapiro-Wilk test on `data` (any order).
///
/// ```
/// use normstat_core::shapiro_wilk;
///
/// let heights = [148.0, 154.0, 158.0, 160.0, 161.0, 162.0, 166.0, 170.0, 182.0, 195.0, 236.0];
/// let result = shapiro_wilk(&heights).unwrap();
/// assert!((result.statistic - 0.7888).abs() < 1e-3);
/// assert!(result.p_value < 0.05);
/// ```
pub fn shapiro_wilk(data: &[f64]) -> Result<NormalityTest, NormalityError> {
    let n = data.len();
    if n < 3 {
        return Err(NormalityError::TooFewObservations { observations: n });
    }
    if data.iter().any(|value| !value.is_finite()) {
        return Err(NormalityError::NonFinite);
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let range = sorted[n - 1] - sorted[0];
    if !range.is_finite() {
        return Err(NormalityError::RangeOverflow);
    }
    if range < SMALL {
        return Err(NormalityError::ZeroRange);
    }

    let normal =
        Normal::new(0.0, 1.0).map_err(|err| NormalityError::Distribution(err.to_string()))?;
    let half = coefficients(n, &normal);

    // Antisymmetric weight vector over the sorted sample.
    let mut weights = vec![0.0; n];
    for (i, a) in half.iter().enumerate() {
        weights[i] = -a;
        weights[n - 1 - i] = *a;
    }

    let scaled: Vec<f64> = sorted.iter().map(|value| value / range).collect();
    let nf = n as f64;
    let mean_a = weights.iter().sum::<f64>() / nf;
    let mean_x = scaled.iter().sum::<f64>() / nf;
    let mut ssa = 0.0;
    let mut ssx = 0.0;
    let mut sax = 0.0;
    for (a, x) in weights.iter().zip(&scaled) {
        let da = a - mean_a;
        let dx = x - mean_x;
        ssa += da * da;
        ssx += dx * dx;
        sax += da * dx;
    }
    let ssassx = (ssa * ssx).sqrt();
    // 1 - W, computed without cancellation near W = 1
    let w1 = (ssassx - sax) * (ssassx + sax) / (ssa * ssx);
    if w1.is_nan() {
        return Err(NormalityError::UndefinedStatistic);
    }
    let w1 = w1.max(0.0);
    let statistic = 1.0 - w1;

    let p_value = p_value(n, statistic, w1, &normal);
    Ok(NormalityTest { statistic, p_value })
}

/// Upper half of the Shapiro-Wilk coefficient vector, extreme pair first.
fn coefficients(n: usize, normal: &Normal) -> Vec<f64> {
    if n == 3 {
        return vec![FRAC_1_SQRT_2];
    }

    let nf = n as f64;
    let half = n / 2;
    let an25 = nf + 0.25;
    let m: Vec<f64> = (1..=half)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / an25))
        .collect();
    let summ2 = 2.0 * m.iter().map(|value| value * value).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / nf.sqrt();
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;

    let mut a = vec![0.0; half];
    a[0] = a1;
    let (first_scaled, fac) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };
    for (slot, quantile) in a.iter_mut().zip(&m).skip(first_scaled) {
        *slot = -quantile / fac;
    }
    a
}

fn p_value(n: usize, statistic: f64, w1: f64, normal: &Normal) -> f64 {
    if n == 3 {
        // Exact distribution for n = 3.
        let stqr = PI / 3.0;
        return (6.0 / PI * (statistic.sqrt().asin() - stqr)).max(0.0);
    }

    let nf = n as f64;
    let mut y = w1.ln();
    let (mean, sd) = if n <= 11 {
        let gamma = poly(&G, nf);
        if y >= gamma {
            return 1e-99;
        }
        y = -(gamma - y).ln();
        (poly(&C3, nf), poly(&C4, nf).exp())
    } else {
        let ln_n = nf.ln();
        (poly(&C5, ln_n), poly(&C6, ln_n).exp())
    };
    normal.sf((y - mean) / sd)
}

/// Evaluates `c[0] + c[1] x + c[2] x^2 + ...`.
fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, coefficient| acc * x + coefficient)
}
