//! Result tensors keyed by measure, distance index, and node index (§3).

use std::collections::HashMap;

use streetnet_core::Distances;

use crate::measure::Measure;

/// `results[measure][d][node]`, one contiguous matrix per measure.
pub struct CentralityResults {
    pub distances: Distances,
    pub column: HashMap<Measure, Vec<Vec<f64>>>,
}

impl CentralityResults {
    pub fn new(distances: Distances, _node_count: usize) -> Self {
        Self { distances, column: HashMap::new() }
    }

    pub fn column_mut(&mut self, measure: Measure, node_count: usize) -> &mut Vec<Vec<f64>> {
        self.column
            .entry(measure)
            .or_insert_with(|| vec![vec![0.0; node_count]; self.distances.len()])
    }

    /// The value for `measure` at threshold index `d_idx` for `node`, or
    /// `None` if `measure` was never requested.
    pub fn get(&self, measure: Measure, d_idx: usize, node: usize) -> Option<f64> {
        self.column.get(&measure).map(|m| m[d_idx][node])
    }
}
