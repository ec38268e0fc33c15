//! Network-side façade (§6): external UID tracking, `graph_from_arrays`,
//! `compute_centralities`, and `metrics_to_dict`. External string UIDs live
//! only here — the kernels below never see them.

use std::collections::HashMap;

use streetnet_core::{Distances, NodeId, Point2};
use streetnet_centrality::{CentralityResults, Measure, compute_centrality};
use streetnet_spatial::{Graph, GraphBuilder};

use crate::error::{FacadeError, FacadeResult};

/// A packed, directed-edge triple as it arrives from the graph-preparation
/// collaborator (§6 input contract): `(from_idx, to_idx, length, impedance)`.
pub struct RawEdge {
    pub from: usize,
    pub to: usize,
    pub length: f64,
    pub impedance: f64,
}

/// Owns the external UID list alongside the packed [`Graph`] and the most
/// recently computed centrality tensors.
pub struct NetworkFacade {
    pub uids: Vec<String>,
    pub graph: Graph,
    pub centrality: Option<CentralityResults>,
}

impl NetworkFacade {
    /// `graph_from_arrays(...)` (§6): build a [`Graph`] from the external
    /// node/edge arrays, validating that every array lines up with
    /// `node_uids`.
    pub fn graph_from_arrays(
        node_uids: Vec<String>,
        xs: Vec<f64>,
        ys: Vec<f64>,
        live: Vec<bool>,
        ghosted: Vec<bool>,
        weight: Vec<Option<f64>>,
        edges: Vec<RawEdge>,
    ) -> FacadeResult<Self> {
        let n = node_uids.len();
        for (what, got) in [("x", xs.len()), ("y", ys.len()), ("live", live.len()), ("ghosted", ghosted.len()), ("weight", weight.len())] {
            if got != n {
                return Err(FacadeError::UidCountMismatch { what, expected: n, got });
            }
        }

        let mut builder = GraphBuilder::with_capacity(n, edges.len());
        for i in 0..n {
            builder.add_node(Point2::new(xs[i], ys[i]), live[i], ghosted[i], weight[i]);
        }
        for e in &edges {
            if e.from >= n || e.to >= n {
                return Err(FacadeError::Network(streetnet_core::NetworkError::Validation(format!(
                    "edge references node index out of range: {} or {} (node count {n})",
                    e.from, e.to
                ))));
            }
            builder.add_directed_edge(NodeId(e.from as u32), NodeId(e.to as u32), e.length, e.impedance);
        }

        let graph = builder.build()?;
        Ok(Self { uids: node_uids, graph, centrality: None })
    }

    /// `network.compute_centralities(measures, angular)` (§6), with the
    /// string-keyed metric set translated to the tagged variant set at the
    /// boundary (§9 design note).
    pub fn compute_centralities(
        &mut self,
        measure_names: &[&str],
        distances: &Distances,
        angular: bool,
        weighted: bool,
        only_live: bool,
    ) -> FacadeResult<()> {
        let measures = measure_names
            .iter()
            .map(|&name| measure_from_name(name).ok_or_else(|| FacadeError::UnknownMetric(name.to_string())))
            .collect::<FacadeResult<Vec<Measure>>>()?;
        let results = compute_centrality(&self.graph, distances, &measures, angular, weighted, only_live);
        self.centrality = Some(results);
        Ok(())
    }

    /// `network.metrics_to_dict()` (§6): marshal the last computed
    /// centrality tensors back into a UID-keyed dictionary of
    /// `"{metric}_{distance}" -> value`.
    pub fn metrics_to_dict(&self) -> FacadeResult<HashMap<String, HashMap<String, f64>>> {
        let results = self
            .centrality
            .as_ref()
            .ok_or_else(|| FacadeError::Network(streetnet_core::NetworkError::Usage("metrics_to_dict called before compute_centralities".into())))?;

        let d_values: Vec<f64> = results.distances.iter().collect();
        let mut out = HashMap::with_capacity(self.uids.len());
        for (node, uid) in self.uids.iter().enumerate() {
            let mut row = HashMap::new();
            for (&measure, matrix) in &results.column {
                for (d_idx, &d) in d_values.iter().enumerate() {
                    row.insert(format!("{}_{}", measure.name(), d as u32), matrix[d_idx][node]);
                }
            }
            out.insert(uid.clone(), row);
        }
        Ok(out)
    }
}

fn measure_from_name(name: &str) -> Option<Measure> {
    Some(match name {
        "node_density" => Measure::NodeDensity,
        "farness_impedance" => Measure::FarnessImpedance,
        "farness_distance" => Measure::FarnessDistance,
        "harmonic_closeness" => Measure::HarmonicCloseness,
        "improved_closeness" => Measure::ImprovedCloseness,
        "gravity" => Measure::Gravity,
        "cycles" => Measure::Cycles,
        "betweenness" => Measure::Betweenness,
        "betweenness_gravity" => Measure::BetweennessGravity,
        _ => return None,
    })
}
