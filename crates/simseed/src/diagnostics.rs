//! Statistical diagnostics for drawn sample streams.
//!
//! Provides:
//! - Chi-square uniformity statistic over [0, 1)
//! - Sample autocorrelation and integrated autocorrelation time

/// Chi-square statistic of `samples` against a flat histogram over [0, 1)
/// with `nbins` equal-width bins.
///
/// Samples outside [0, 1) are ignored. Returns 0.0 for empty input or zero
/// bins.
pub fn chi_square_uniformity(samples: &[f64], nbins: usize) -> f64 {
    if samples.is_empty() || nbins == 0 {
        return 0.0;
    }

    let mut counts = vec![0usize; nbins];
    let mut total = 0usize;
    for &x in samples {
        if (0.0..1.0).contains(&x) {
            let bin = ((x * nbins as f64) as usize).min(nbins - 1);
            counts[bin] += 1;
            total += 1;
        }
    }

    if total == 0 {
        return 0.0;
    }

    let expected = total as f64 / nbins as f64;
    counts
        .iter()
        .map(|&observed| {
            let delta = observed as f64 - expected;
            delta * delta / expected
        })
        .sum()
}

/// Normalized sample autocorrelation of `samples` at the given lag.
///
/// Returns 0.0 when the series is no longer than `lag` or has vanishing
/// variance.
pub fn autocorrelation(samples: &[f64], lag: usize) -> f64 {
    let n = samples.len();
    if n <= lag {
        return 0.0;
    }

    let mean = samples.iter().sum::<f64>() / n as f64;
    let variance = samples.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;
    if variance < 1e-12 {
        return 0.0;
    }

    let pairs = n - lag;
    let mut covariance = 0.0;
    for i in 0..pairs {
        covariance += (samples[i] - mean) * (samples[i + lag] - mean);
    }

    covariance / (pairs as f64 * variance)
}

/// Integrated autocorrelation time τ_int = 0.5 + Σ_lag ρ(lag).
///
/// Summation is truncated at the first negative lag, or at
/// `max_lag.min(len / 2)`, whichever comes first. An uncorrelated stream
/// yields τ_int ≈ 0.5.
pub fn integrated_autocorr_time(samples: &[f64], max_lag: usize) -> f64 {
    let cutoff = max_lag.min(samples.len() / 2);

    let mut tau = 0.5;
    for lag in 1..=cutoff {
        let rho = autocorrelation(samples, lag);
        if rho < 0.0 {
            break;
        }
        tau += rho;
    }
    tau
}
