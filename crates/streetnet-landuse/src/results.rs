//! Result tensors for land-use aggregation (§3): `results[metric][(q,)d][src]`.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use streetnet_core::{ClassId, Distances};

use crate::measure::{HillMeasure, OtherMeasure};

pub struct LanduseResults {
    pub distances: Distances,
    /// `[d][node]` per `(measure, q)`.
    pub mixed_uses: HashMap<(HillMeasure, OrderedFloat<f64>), Vec<Vec<f64>>>,
    /// `[d][node]` per measure.
    pub other: HashMap<OtherMeasure, Vec<Vec<f64>>>,
    /// `[d][node]` per requested accessibility class.
    pub accessibility_weighted: HashMap<ClassId, Vec<Vec<f64>>>,
    pub accessibility_non_weighted: HashMap<ClassId, Vec<Vec<f64>>>,
}

impl LanduseResults {
    pub fn new(distances: Distances) -> Self {
        Self {
            distances,
            mixed_uses: HashMap::new(),
            other: HashMap::new(),
            accessibility_weighted: HashMap::new(),
            accessibility_non_weighted: HashMap::new(),
        }
    }

    pub fn mixed_use_mut(&mut self, measure: HillMeasure, q: f64, node_count: usize) -> &mut Vec<Vec<f64>> {
        self.mixed_uses
            .entry((measure, OrderedFloat(q)))
            .or_insert_with(|| vec![vec![0.0; node_count]; self.distances.len()])
    }

    pub fn other_mut(&mut self, measure: OtherMeasure, node_count: usize) -> &mut Vec<Vec<f64>> {
        self.other
            .entry(measure)
            .or_insert_with(|| vec![vec![0.0; node_count]; self.distances.len()])
    }

    pub fn accessibility_weighted_mut(&mut self, class: ClassId, node_count: usize) -> &mut Vec<Vec<f64>> {
        self.accessibility_weighted
            .entry(class)
            .or_insert_with(|| vec![vec![0.0; node_count]; self.distances.len()])
    }

    pub fn accessibility_non_weighted_mut(&mut self, class: ClassId, node_count: usize) -> &mut Vec<Vec<f64>> {
        self.accessibility_non_weighted
            .entry(class)
            .or_insert_with(|| vec![vec![0.0; node_count]; self.distances.len()])
    }

    pub fn mixed_use(&self, measure: HillMeasure, q: f64, d_idx: usize, node: usize) -> Option<f64> {
        self.mixed_uses.get(&(measure, OrderedFloat(q))).map(|m| m[d_idx][node])
    }

    pub fn other(&self, measure: OtherMeasure, d_idx: usize, node: usize) -> Option<f64> {
        self.other.get(&measure).map(|m| m[d_idx][node])
    }
}
