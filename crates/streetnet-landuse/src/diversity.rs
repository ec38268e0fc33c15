//! Diversity and accessibility math over class-proportion vectors (§4.7).
//!
//! The Hill-number family ([`hill_number`]) and the plain Shannon/Gini-Simpson
//! measures share one convention: an empty reach set (no reachable classes)
//! yields `0`, never `NaN` or a panic.

/// Classical Hill number of order `q` over class proportions `p` (which must
/// already sum to 1 over nonzero entries). `q = 0` reduces to class count;
/// `q -> 1` is handled as the exponential-of-Shannon limit.
pub fn hill_number(proportions: &[f64], q: f64) -> f64 {
    if proportions.is_empty() {
        return 0.0;
    }
    if (q - 1.0).abs() < 1e-9 {
        let shannon_h: f64 = -proportions.iter().filter(|&&p| p > 0.0).map(|&p| p * p.ln()).sum::<f64>();
        shannon_h.exp()
    } else {
        let sum: f64 = proportions.iter().filter(|&&p| p > 0.0).map(|&p| p.powf(q)).sum();
        if sum <= 0.0 {
            0.0
        } else {
            sum.powf(1.0 / (1.0 - q))
        }
    }
}

/// Shannon entropy (natural log) over class proportions.
pub fn shannon(proportions: &[f64]) -> f64 {
    -proportions.iter().filter(|&&p| p > 0.0).map(|&p| p * p.ln()).sum::<f64>()
}

/// Gini-Simpson index: `1 - sum(p_i^2)`.
pub fn gini_simpson(proportions: &[f64]) -> f64 {
    1.0 - proportions.iter().map(|&p| p * p).sum::<f64>()
}

/// Rao's quadratic entropy: `sum_{i != j} p_i * p_j * disparity(i, j)`, over
/// an explicit pairwise weight/disparity callback so callers can supply
/// either a binary "different class" dissimilarity or a full disparity
/// matrix.
///
/// `weighted_probs` pairs each reachable individual with its normalised
/// weight (e.g. distance-decayed abundance) and its class index; `disparity`
/// looks up `d(class_i, class_j)`.
pub fn rao_quadratic_entropy(
    weighted_probs: &[(usize, f64)],
    disparity: impl Fn(usize, usize) -> f64,
) -> f64 {
    let mut q = 0.0;
    for (i, &(class_i, p_i)) in weighted_probs.iter().enumerate() {
        for &(class_j, p_j) in weighted_probs.iter().skip(i + 1) {
            q += 2.0 * p_i * p_j * disparity(class_i, class_j);
        }
    }
    q
}

/// The Chiu-Jost-Chao functional Hill number of order `q`, built from Rao's
/// quadratic entropy `Q` and the same pairwise weights/disparities. Reduces
/// to `1/Q` at `q = 2` and to the Rao-weighted exponential at `q = 1`.
/// Returns `0` when `Q = 0` (a homogeneous or empty reach set), matching the
/// convention used throughout this module.
pub fn functional_hill_number(
    weighted_probs: &[(usize, f64)],
    disparity: impl Fn(usize, usize) -> f64 + Copy,
    q: f64,
) -> f64 {
    let rao_q = rao_quadratic_entropy(weighted_probs, disparity);
    if rao_q <= 0.0 {
        return 0.0;
    }

    if (q - 1.0).abs() < 1e-9 {
        let mut acc = 0.0;
        for (i, &(class_i, p_i)) in weighted_probs.iter().enumerate() {
            for &(class_j, p_j) in weighted_probs.iter().skip(i + 1) {
                let d = disparity(class_i, class_j);
                if d <= 0.0 {
                    continue;
                }
                let term = d * p_i * p_j / rao_q;
                acc += term * term.ln();
            }
        }
        (-acc).exp()
    } else {
        let mut sum = 0.0;
        for (i, &(class_i, p_i)) in weighted_probs.iter().enumerate() {
            for &(class_j, p_j) in weighted_probs.iter().skip(i + 1) {
                let d = disparity(class_i, class_j);
                if d <= 0.0 {
                    continue;
                }
                sum += d * ((p_i * p_j) / rao_q).powf(q);
            }
        }
        if sum <= 0.0 { 0.0 } else { sum.powf(1.0 / (1.0 - q)) }
    }
}

/// Binary ("naive") dissimilarity: `1` if the two classes differ, else `0`.
#[inline]
pub fn binary_disparity(a: usize, b: usize) -> f64 {
    if a == b { 0.0 } else { 1.0 }
}
