//! `streetnet-centrality` — per-source centrality aggregation over shortest-path
//! trees (§4.6).
//!
//! A single pass over every source node's SPT accumulates, at every
//! requested distance threshold, the configured centrality measures. Source
//! iterations are embarrassingly parallel (§5): each reads only the shared
//! immutable graph and writes its own result column, except the betweenness
//! family, whose contributions land on intermediate nodes rather than the
//! source and are therefore combined with a parallel reduce instead of a
//! disjoint per-source write (see `DESIGN.md` for the reasoning).
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Dispatches the per-source loop across a `rayon` pool.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.         |

mod measure;
mod results;

#[cfg(test)]
mod tests;

pub use measure::Measure;
pub use results::CentralityResults;

use std::collections::HashMap;

use streetnet_core::config::beta_from_distance;
use streetnet_core::{Distances, NodeId};
use streetnet_spatial::{Graph, Spt, build_spt, radial_filter_from_node};

/// Compute the requested centrality measures for every (optionally
/// `live`-only) source node, across every threshold in `distances`.
pub fn compute_centrality(
    graph: &Graph,
    distances: &Distances,
    measures: &[Measure],
    angular: bool,
    weighted: bool,
    only_live: bool,
) -> CentralityResults {
    let n = graph.node_count();
    let d_count = distances.len();
    let mode = if angular { streetnet_core::SptMode::Angular } else { streetnet_core::SptMode::Metric };

    let sources: Vec<usize> = (0..n).filter(|&i| !only_live || graph.node_live[i]).collect();

    let needs_improved_closeness = measures.contains(&Measure::ImprovedCloseness);
    let needs_betweenness = measures.iter().any(Measure::is_betweenness);

    #[cfg(feature = "parallel")]
    let per_source: Vec<SourceContribution> = {
        use rayon::prelude::*;
        sources
            .par_iter()
            .map(|&src| {
                compute_for_source(graph, distances, measures, mode, weighted, NodeId(src as u32), needs_betweenness)
            })
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let per_source: Vec<SourceContribution> = sources
        .iter()
        .map(|&src| compute_for_source(graph, distances, measures, mode, weighted, NodeId(src as u32), needs_betweenness))
        .collect();

    let mut results = CentralityResults::new(distances.clone(), n);

    for contribution in &per_source {
        let src = contribution.src;
        for (&measure, values) in &contribution.column {
            let cell = results.column_mut(measure, n);
            for d_idx in 0..d_count {
                cell[d_idx][src] = values[d_idx];
            }
        }
        if let Some(delta) = &contribution.betweenness {
            for (&measure, matrix) in delta {
                let cell = results.column_mut(measure, n);
                for d_idx in 0..d_count {
                    for k in 0..n {
                        cell[d_idx][k] += matrix[d_idx][k];
                    }
                }
            }
        }
    }

    if needs_improved_closeness {
        let density = results.column.get(&Measure::NodeDensity).cloned();
        let farness = results.column.get(&Measure::FarnessDistance).cloned();
        if let (Some(density), Some(farness)) = (density, farness) {
            let cell = results.column_mut(Measure::ImprovedCloseness, n);
            for d_idx in 0..d_count {
                for node in 0..n {
                    let f = farness[d_idx][node];
                    cell[d_idx][node] = if f > 0.0 { density[d_idx][node].powi(2) / f } else { 0.0 };
                }
            }
        }
    }

    // Drop internal-only accumulators (density/farness_distance kept purely
    // to derive improved_closeness) unless the caller actually asked for them.
    results.column.retain(|m, _| measures.contains(m));

    results
}

struct SourceContribution {
    src: usize,
    column: HashMap<Measure, Vec<f64>>,
    betweenness: Option<HashMap<Measure, Vec<Vec<f64>>>>,
}

fn compute_for_source(
    graph: &Graph,
    distances: &Distances,
    measures: &[Measure],
    mode: streetnet_core::SptMode,
    weighted: bool,
    src: NodeId,
    needs_betweenness: bool,
) -> SourceContribution {
    let n = graph.node_count();
    let d_count = distances.len();
    let max_dist = distances.max();

    let trim = radial_filter_from_node(graph, src, max_dist);
    let tree: Spt = build_spt(graph, &trim, src, max_dist, mode);
    let src_trim = trim.full_to_trim[src.index()].expect("source survives its own trim map") as usize;

    let mut column: HashMap<Measure, Vec<f64>> = HashMap::new();
    column.insert(Measure::NodeDensity, vec![0.0; d_count]);
    column.insert(Measure::FarnessImpedance, vec![0.0; d_count]);
    column.insert(Measure::FarnessDistance, vec![0.0; d_count]);
    column.insert(Measure::HarmonicCloseness, vec![0.0; d_count]);
    column.insert(Measure::Gravity, vec![0.0; d_count]);
    column.insert(Measure::Cycles, vec![0.0; d_count]);

    let mut betweenness: Option<HashMap<Measure, Vec<Vec<f64>>>> = if needs_betweenness {
        let mut m = HashMap::new();
        if measures.contains(&Measure::Betweenness) {
            m.insert(Measure::Betweenness, vec![vec![0.0; n]; d_count]);
        }
        if measures.contains(&Measure::BetweennessGravity) {
            m.insert(Measure::BetweennessGravity, vec![vec![0.0; n]; d_count]);
        }
        Some(m)
    } else {
        None
    };

    let d_values: Vec<f64> = distances.iter().collect();
    let betas: Vec<f64> = d_values.iter().map(|&d| beta_from_distance(d)).collect();

    for j in 0..trim.len() {
        if j == src_trim {
            continue;
        }
        let dist_j = tree.distance[j];
        if !dist_j.is_finite() {
            continue;
        }
        let imp_j = tree.impedance[j];
        let j_full = trim.trim_to_full[j];

        let mult = if weighted {
            graph.node_weight[src.index()] * graph.node_weight[j_full.index()]
        } else {
            1.0
        };

        let start = d_values.partition_point(|&dd| dd < dist_j);

        if start >= d_count {
            continue;
        }

        let path_k: Vec<usize> = if betweenness.is_some() {
            intermediate_trimmed_nodes(&tree, j, src_trim)
        } else {
            Vec::new()
        };

        for d_idx in start..d_count {
            let beta_d = betas[d_idx];
            column.get_mut(&Measure::NodeDensity).unwrap()[d_idx] += mult;
            column.get_mut(&Measure::FarnessImpedance).unwrap()[d_idx] += mult * imp_j;
            column.get_mut(&Measure::FarnessDistance).unwrap()[d_idx] += mult * dist_j;
            if imp_j > 0.0 {
                column.get_mut(&Measure::HarmonicCloseness).unwrap()[d_idx] += mult / imp_j;
            }
            let gravity_term = (beta_d * imp_j).exp();
            column.get_mut(&Measure::Gravity).unwrap()[d_idx] += mult * gravity_term;
            column.get_mut(&Measure::Cycles).unwrap()[d_idx] += mult * tree.cycles[j] as f64;

            if let Some(bt) = &mut betweenness {
                if let Some(m) = bt.get_mut(&Measure::Betweenness) {
                    for &k_trim in &path_k {
                        let k_full = trim.trim_to_full[k_trim];
                        m[d_idx][k_full.index()] += mult;
                    }
                }
                if let Some(m) = bt.get_mut(&Measure::BetweennessGravity) {
                    for &k_trim in &path_k {
                        let k_full = trim.trim_to_full[k_trim];
                        m[d_idx][k_full.index()] += mult * gravity_term;
                    }
                }
            }
        }
    }

    SourceContribution { src: src.index(), column, betweenness }
}

/// Trimmed indices strictly between `j` and `src_trim` on the predecessor
/// chain (excludes both endpoints).
fn intermediate_trimmed_nodes(tree: &Spt, j: usize, src_trim: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut cur = tree.pred[j];
    while cur >= 0 && cur as usize != src_trim {
        out.push(cur as usize);
        cur = tree.pred[cur as usize];
    }
    out
}
