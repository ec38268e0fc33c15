//! Categorical land-use class encoding and disparity matrices (§3, §6).
//!
//! Raw string labels are encoded by sorting the unique set ascending and
//! mapping to `ClassId = [0..C)`; the façade holds the label list and feeds
//! it to [`encode`] once, up front.

use streetnet_core::ClassId;

use crate::error::{LanduseError, LanduseResult};

/// A bijection between sorted, deduplicated class labels and `ClassId`.
#[derive(Debug, Clone)]
pub struct ClassTable {
    labels: Vec<String>,
}

impl ClassTable {
    /// Build the table from raw (possibly duplicated, unordered) labels.
    pub fn from_labels<I: IntoIterator<Item = String>>(labels: I) -> Self {
        let mut labels: Vec<String> = labels.into_iter().collect();
        labels.sort();
        labels.dedup();
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Encode a raw label to its `ClassId`, or an error if unknown.
    pub fn encode(&self, label: &str) -> LanduseResult<ClassId> {
        self.labels
            .binary_search_by(|l| l.as_str().cmp(label))
            .map(|i| ClassId(i as u32))
            .map_err(|_| LanduseError::Validation(format!("unknown land-use label: {label}")))
    }

    /// Decode a `ClassId` back to its label. Round-trips with [`encode`]
    /// (§8: `decode(encode(labels)) = labels`).
    pub fn decode(&self, id: ClassId) -> &str {
        &self.labels[id.index()]
    }
}

/// A symmetric, non-negative disparity matrix over land-use classes, used by
/// the pairwise-disparity Hill and Rao metrics.
#[derive(Debug, Clone)]
pub struct DisparityMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DisparityMatrix {
    /// Build from a dense row-major `n x n` matrix. Validates symmetry,
    /// non-negativity, and a zero diagonal.
    pub fn new(n: usize, values: Vec<f64>) -> LanduseResult<Self> {
        if values.len() != n * n {
            return Err(LanduseError::Validation(format!(
                "disparity matrix has {} entries, expected {}",
                values.len(),
                n * n
            )));
        }
        for i in 0..n {
            for j in 0..n {
                let v = values[i * n + j];
                if !(v.is_finite() && v >= 0.0) {
                    return Err(LanduseError::Validation(format!(
                        "disparity[{i}][{j}] = {v} must be finite and >= 0"
                    )));
                }
                if (v - values[j * n + i]).abs() > 1e-9 {
                    return Err(LanduseError::Validation(format!(
                        "disparity matrix not symmetric at ({i}, {j})"
                    )));
                }
            }
            if values[i * n + i] != 0.0 {
                return Err(LanduseError::Validation(format!("disparity[{i}][{i}] must be 0")));
            }
        }
        Ok(Self { n, values })
    }

    #[inline]
    pub fn get(&self, a: ClassId, b: ClassId) -> f64 {
        self.values[a.index() * self.n + b.index()]
    }

    pub fn class_count(&self) -> usize {
        self.n
    }
}
