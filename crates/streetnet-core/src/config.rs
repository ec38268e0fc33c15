//! Distance/beta configuration recognised at the façade boundary (§6).
//!
//! Mirrors the role `dt-core::time::SimConfig` plays for the simulation
//! framework: a small validated value type built once up front and passed by
//! reference into the kernels, rather than re-derived on every call.

use crate::error::{NetworkError, NetworkResult};

/// `w_min = exp(-4)`, the weight at which the exponential decay kernel is
/// considered to have reached its distance threshold.
pub const W_MIN: f64 = 0.01831563888873418;

/// The decay exponent `beta_d = ln(w_min) / d` used by the exponential
/// distance-weighting kernels (gravity, hill_branch_wt, accessibility
/// weighting).
#[inline]
pub fn beta_from_distance(d: f64) -> f64 {
    W_MIN.ln() / d
}

/// Inverse of [`beta_from_distance`]: the distance at which a given decay
/// exponent reaches `w_min`, rounded up to the nearest integer metre per the
/// `betas` configuration parameter (§6).
#[inline]
pub fn distance_from_beta(beta: f64) -> f64 {
    (W_MIN.ln() / beta).ceil()
}

/// An ordered, deduplicated, strictly positive set of distance thresholds.
///
/// Constructed either directly from distances or derived from betas; either
/// way the kernels only ever see a validated `Distances`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distances(Vec<f64>);

impl Distances {
    /// Build from explicit distance thresholds. Sorts ascending and
    /// deduplicates; every value must be finite and positive.
    pub fn new(mut distances: Vec<f64>) -> NetworkResult<Self> {
        if distances.is_empty() {
            return Err(NetworkError::Validation(
                "distances must be non-empty".into(),
            ));
        }
        for &d in &distances {
            if !(d.is_finite() && d > 0.0) {
                return Err(NetworkError::Validation(format!(
                    "distance {d} must be finite and positive"
                )));
            }
        }
        distances.sort_by(|a, b| a.partial_cmp(b).expect("validated finite"));
        distances.dedup_by(|a, b| a == b);
        Ok(Self(distances))
    }

    /// Build from beta decay exponents via [`distance_from_beta`].
    pub fn from_betas(betas: &[f64]) -> NetworkResult<Self> {
        if betas.is_empty() {
            return Err(NetworkError::Validation("betas must be non-empty".into()));
        }
        let distances = betas.iter().map(|&b| distance_from_beta(b)).collect();
        Self::new(distances)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The largest threshold — the radius an SPT must be built to in order
    /// to serve every requested distance in one pass.
    pub fn max(&self) -> f64 {
        *self.0.last().expect("non-empty by construction")
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl std::ops::Index<usize> for Distances {
    type Output = f64;
    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}
