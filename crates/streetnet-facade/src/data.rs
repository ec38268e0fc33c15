//! Data-side façade (§6): external UID tracking, class-label encoding, and
//! `compute_landuses`.

use std::collections::HashMap;

use streetnet_core::{ClassId, Distances, Point2};
use streetnet_landuse::{ClassTable, DataLayer, DisparityMatrix, HillMeasure, LanduseRequest, LanduseResults, OtherMeasure, compute_landuses};

use crate::error::{FacadeError, FacadeResult};
use crate::network::NetworkFacade;

/// Owns the external data-point UID list, the encoded [`DataLayer`], and the
/// class-label table used to decode results back to the caller's labels.
pub struct DataFacade {
    pub uids: Vec<String>,
    pub data: DataLayer,
    pub classes: ClassTable,
}

impl DataFacade {
    /// `(data_uids, data_map)` input contract (§6): raw positions, liveness,
    /// and string class labels, with labels encoded by sorting the unique
    /// set ascending (§6).
    pub fn from_arrays(data_uids: Vec<String>, xs: Vec<f64>, ys: Vec<f64>, live: Vec<bool>, class_labels: Vec<String>) -> FacadeResult<Self> {
        let n = data_uids.len();
        for (what, got) in [("x", xs.len()), ("y", ys.len()), ("live", live.len()), ("class_labels", class_labels.len())] {
            if got != n {
                return Err(FacadeError::UidCountMismatch { what, expected: n, got });
            }
        }

        let classes = ClassTable::from_labels(class_labels.iter().cloned());
        let class_code = class_labels
            .iter()
            .map(|l| classes.encode(l))
            .collect::<Result<Vec<ClassId>, _>>()?;
        let pos: Vec<Point2> = xs.into_iter().zip(ys).map(|(x, y)| Point2::new(x, y)).collect();

        let data = DataLayer::new(pos, live, class_code)?;
        Ok(Self { uids: data_uids, data, classes })
    }

    /// `data.assign_to_network(network, max_assign_dist)` (§6).
    pub fn assign_to_network(&mut self, network: &NetworkFacade, max_assign_dist: f64) {
        self.data.assign_to_network(&network.graph, max_assign_dist);
    }

    /// `data.compute_landuses(labels, mixed_use_metrics, accessibility_labels, qs, disparity_matrix?)` (§6).
    /// String-keyed metric names are translated to the tagged variant sets
    /// at this boundary (§9 design note); `accessibility_labels` are encoded
    /// through `self.classes`.
    pub fn compute_landuses(
        &self,
        network: &NetworkFacade,
        mixed_use_metrics: &[&str],
        other_metrics: &[&str],
        accessibility_labels: &[&str],
        qs: &[f64],
        disparity_matrix: Option<&DisparityMatrix>,
        distances: &Distances,
        angular: bool,
        only_live: bool,
    ) -> FacadeResult<LanduseResults> {
        let hill_measures = mixed_use_metrics
            .iter()
            .map(|&name| hill_measure_from_name(name).ok_or_else(|| FacadeError::UnknownMetric(name.to_string())))
            .collect::<FacadeResult<Vec<HillMeasure>>>()?;
        let other_measures = other_metrics
            .iter()
            .map(|&name| other_measure_from_name(name).ok_or_else(|| FacadeError::UnknownMetric(name.to_string())))
            .collect::<FacadeResult<Vec<OtherMeasure>>>()?;
        let accessibility_classes = accessibility_labels
            .iter()
            .map(|&label| self.classes.encode(label).map_err(FacadeError::from))
            .collect::<FacadeResult<Vec<ClassId>>>()?;

        let request = LanduseRequest {
            hill_measures: &hill_measures,
            other_measures: &other_measures,
            accessibility_classes: &accessibility_classes,
            qs,
            disparity: disparity_matrix,
        };

        Ok(compute_landuses(&network.graph, &self.data, &request, distances, angular, only_live)?)
    }

    /// Marshal [`LanduseResults`] back into a UID-keyed dictionary of
    /// `"{metric}_{distance}[_q{q}]" -> value`, with accessibility results
    /// addressed by the class **label** rather than the numeric `ClassId`
    /// (`test_layers.py::test_compute_landuses` upstream).
    pub fn landuses_to_dict(&self, network: &NetworkFacade, results: &LanduseResults) -> HashMap<String, HashMap<String, f64>> {
        let d_values: Vec<f64> = results.distances.iter().collect();
        let mut out: HashMap<String, HashMap<String, f64>> = network.uids.iter().map(|uid| (uid.clone(), HashMap::new())).collect();

        for (&(measure, q), matrix) in &results.mixed_uses {
            for (d_idx, &d) in d_values.iter().enumerate() {
                for (node, uid) in network.uids.iter().enumerate() {
                    out.get_mut(uid).unwrap().insert(format!("mixed_uses.{}_q{}_{}", measure.name(), q.into_inner(), d as u32), matrix[d_idx][node]);
                }
            }
        }
        for (&measure, matrix) in &results.other {
            for (d_idx, &d) in d_values.iter().enumerate() {
                for (node, uid) in network.uids.iter().enumerate() {
                    out.get_mut(uid).unwrap().insert(format!("mixed_uses.{}_{}", measure.name(), d as u32), matrix[d_idx][node]);
                }
            }
        }
        for (&class, matrix) in &results.accessibility_non_weighted {
            let label = self.classes.decode(class);
            for (d_idx, &d) in d_values.iter().enumerate() {
                for (node, uid) in network.uids.iter().enumerate() {
                    out.get_mut(uid).unwrap().insert(format!("accessibility.non_weighted.{label}_{}", d as u32), matrix[d_idx][node]);
                }
            }
        }
        for (&class, matrix) in &results.accessibility_weighted {
            let label = self.classes.decode(class);
            for (d_idx, &d) in d_values.iter().enumerate() {
                for (node, uid) in network.uids.iter().enumerate() {
                    out.get_mut(uid).unwrap().insert(format!("accessibility.weighted.{label}_{}", d as u32), matrix[d_idx][node]);
                }
            }
        }

        out
    }
}

fn hill_measure_from_name(name: &str) -> Option<HillMeasure> {
    Some(match name {
        "hill" => HillMeasure::Hill,
        "hill_branch_wt" => HillMeasure::HillBranchWt,
        "hill_pairwise_wt" => HillMeasure::HillPairwiseWt,
        "hill_pairwise_disparity" => HillMeasure::HillPairwiseDisparity,
        _ => return None,
    })
}

fn other_measure_from_name(name: &str) -> Option<OtherMeasure> {
    Some(match name {
        "shannon" => OtherMeasure::Shannon,
        "gini_simpson" => OtherMeasure::GiniSimpson,
        "raos_pairwise_disparity" => OtherMeasure::RaosPairwiseDisparity,
        _ => return None,
    })
}
