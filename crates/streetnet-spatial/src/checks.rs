//! Validate packed node/edge arrays before any kernel runs (§4.1).
//!
//! Fails fast on the first violation found. Checks run once, at build time;
//! every kernel downstream trusts these invariants and never re-validates.

use streetnet_core::NodeId;

use crate::error::SpatialError;
use crate::network::Graph;

pub fn validate(graph: &Graph) -> Result<(), SpatialError> {
    let n = graph.node_count();

    if graph.node_live.len() != n || graph.node_ghosted.len() != n || graph.node_weight.len() != n {
        return Err(SpatialError::Validation(format!(
            "node column length mismatch: pos={n} live={} ghosted={} weight={}",
            graph.node_live.len(),
            graph.node_ghosted.len(),
            graph.node_weight.len(),
        )));
    }
    if graph.node_out_start.len() != n + 1 {
        return Err(SpatialError::Validation(format!(
            "node_out_start length {} != node_count + 1 ({})",
            graph.node_out_start.len(),
            n + 1
        )));
    }

    for (i, pos) in graph.node_pos.iter().enumerate() {
        if !pos.is_finite() {
            return Err(SpatialError::Validation(format!("node {i} has non-finite coordinates")));
        }
        if !graph.node_weight[i].is_finite() || graph.node_weight[i] < 0.0 {
            return Err(SpatialError::Validation(format!(
                "node {i} has invalid weight {}",
                graph.node_weight[i]
            )));
        }
    }

    let e = graph.edge_count();
    if graph.edge_to.len() != e || graph.edge_length.len() != e || graph.edge_impedance.len() != e {
        return Err(SpatialError::Validation(format!(
            "edge column length mismatch: from={e} to={} length={} impedance={}",
            graph.edge_to.len(),
            graph.edge_length.len(),
            graph.edge_impedance.len(),
        )));
    }

    for idx in 0..e {
        let from = graph.edge_from[idx];
        let to = graph.edge_to[idx];
        if from.index() >= n {
            return Err(SpatialError::Validation(format!("edge {idx} has invalid source {from}")));
        }
        if to.index() >= n {
            return Err(SpatialError::Validation(format!("edge {idx} has invalid target {to}")));
        }
        let length = graph.edge_length[idx];
        let impedance = graph.edge_impedance[idx];
        if !(length.is_finite() && length > 0.0) {
            return Err(SpatialError::Validation(format!(
                "edge {idx} ({from} -> {to}) has length {length}, must be finite and > 0"
            )));
        }
        if !(impedance.is_finite() && impedance >= 0.0) {
            return Err(SpatialError::Validation(format!(
                "edge {idx} ({from} -> {to}) has impedance {impedance}, must be finite and >= 0"
            )));
        }
    }

    // Every directed edge (a, b) must have a reverse (b, a).
    let mut forward: std::collections::HashSet<(NodeId, NodeId)> = std::collections::HashSet::with_capacity(e);
    for idx in 0..e {
        forward.insert((graph.edge_from[idx], graph.edge_to[idx]));
    }
    for &(a, b) in &forward {
        if !forward.contains(&(b, a)) {
            return Err(SpatialError::Validation(format!(
                "edge {a} -> {b} has no reverse edge {b} -> {a}"
            )));
        }
    }

    Ok(())
}
