//! Per-source land-use aggregation (§4.7): expand the shortest-path tree,
//! reach data points through their two anchors, and accumulate diversity and
//! accessibility quantities at every requested distance threshold.
//!
//! Source iterations are embarrassingly parallel (§5), mirroring
//! `streetnet-centrality`: each reads only the shared immutable graph and
//! data layer and writes its own disjoint result column.

use std::collections::HashMap;

use ordered_float::OrderedFloat;
use streetnet_core::config::beta_from_distance;
use streetnet_core::{ClassId, Distances, NodeId};
use streetnet_spatial::{Graph, Spt, TrimMap, build_spt, radial_filter_from_node};

use crate::classes::DisparityMatrix;
use crate::data::DataLayer;
use crate::diversity::{binary_disparity, functional_hill_number, gini_simpson, hill_number, rao_quadratic_entropy, shannon};
use crate::error::{LanduseError, LanduseResult};
use crate::measure::{HillMeasure, OtherMeasure};
use crate::results::LanduseResults;

/// What to compute in a single `compute_landuses` call (§6).
pub struct LanduseRequest<'a> {
    pub hill_measures: &'a [HillMeasure],
    pub other_measures: &'a [OtherMeasure],
    pub accessibility_classes: &'a [ClassId],
    pub qs: &'a [f64],
    pub disparity: Option<&'a DisparityMatrix>,
}

impl<'a> LanduseRequest<'a> {
    fn validate(&self) -> LanduseResult<()> {
        if self.hill_measures.is_empty() && self.other_measures.is_empty() && self.accessibility_classes.is_empty() {
            return Err(LanduseError::Usage(
                "at least one of mixed_use_metrics, other_metrics, or accessibility_labels must be requested".into(),
            ));
        }
        let needs_disparity = self.hill_measures.iter().any(|m| m.requires_disparity_matrix())
            || self.other_measures.iter().any(|m| m.requires_disparity_matrix());
        if needs_disparity && self.disparity.is_none() {
            return Err(LanduseError::Usage(
                "a disparity matrix is required for the requested pairwise-disparity metric".into(),
            ));
        }
        if !self.hill_measures.is_empty() && self.qs.is_empty() {
            return Err(LanduseError::Usage("qs must be non-empty when Hill metrics are requested".into()));
        }
        Ok(())
    }
}

/// `data.compute_landuses(...)` (§6). Requires [`DataLayer::assign_to_network`]
/// to have run first.
pub fn compute_landuses(
    graph: &Graph,
    data: &DataLayer,
    request: &LanduseRequest,
    distances: &Distances,
    angular: bool,
    only_live: bool,
) -> LanduseResult<LanduseResults> {
    if !data.is_assigned() {
        return Err(LanduseError::Usage("compute_landuses called before assign_to_network".into()));
    }
    request.validate()?;

    let n = graph.node_count();
    let d_count = distances.len();
    let mode = if angular { streetnet_core::SptMode::Angular } else { streetnet_core::SptMode::Metric };

    let sources: Vec<usize> = (0..n).filter(|&i| !only_live || graph.node_live[i]).collect();

    #[cfg(feature = "parallel")]
    let per_source: Vec<SourceContribution> = {
        use rayon::prelude::*;
        sources
            .par_iter()
            .map(|&src| compute_for_source(graph, data, request, distances, mode, NodeId(src as u32)))
            .collect()
    };
    #[cfg(not(feature = "parallel"))]
    let per_source: Vec<SourceContribution> = sources
        .iter()
        .map(|&src| compute_for_source(graph, data, request, distances, mode, NodeId(src as u32)))
        .collect();

    let mut results = LanduseResults::new(distances.clone());
    for contribution in per_source {
        let src = contribution.src;
        for ((measure, q), values) in contribution.mixed_uses {
            let cell = results.mixed_use_mut(measure, q.into_inner(), n);
            for d_idx in 0..d_count {
                cell[d_idx][src] = values[d_idx];
            }
        }
        for (measure, values) in contribution.other {
            let cell = results.other_mut(measure, n);
            for d_idx in 0..d_count {
                cell[d_idx][src] = values[d_idx];
            }
        }
        for (class, values) in contribution.accessibility_weighted {
            let cell = results.accessibility_weighted_mut(class, n);
            for d_idx in 0..d_count {
                cell[d_idx][src] = values[d_idx];
            }
        }
        for (class, values) in contribution.accessibility_non_weighted {
            let cell = results.accessibility_non_weighted_mut(class, n);
            for d_idx in 0..d_count {
                cell[d_idx][src] = values[d_idx];
            }
        }
    }

    Ok(results)
}

struct SourceContribution {
    src: usize,
    mixed_uses: HashMap<(HillMeasure, OrderedFloat<f64>), Vec<f64>>,
    other: HashMap<OtherMeasure, Vec<f64>>,
    accessibility_weighted: HashMap<ClassId, Vec<f64>>,
    accessibility_non_weighted: HashMap<ClassId, Vec<f64>>,
}

fn compute_for_source(
    graph: &Graph,
    data: &DataLayer,
    request: &LanduseRequest,
    distances: &Distances,
    mode: streetnet_core::SptMode,
    src: NodeId,
) -> SourceContribution {
    let d_count = distances.len();
    let max_dist = distances.max();
    let d_values: Vec<f64> = distances.iter().collect();
    let betas: Vec<f64> = d_values.iter().map(|&d| beta_from_distance(d)).collect();

    let trim = radial_filter_from_node(graph, src, max_dist);
    let tree = build_spt(graph, &trim, src, max_dist, mode);

    // Gather every reachable data point once at the largest radius; the
    // per-distance accumulation below re-derives decay weights from each
    // threshold's own beta, since beta depends on d.
    let mut reachable: Vec<(usize, f64)> = Vec::new();
    for p in 0..data.len() {
        if graph.node_pos[src.index()].distance(data.pos[p]) > max_dist {
            continue;
        }
        let reach0 = anchor_reach(graph, &trim, &tree, data.pos[p], data.nearest_assigned[p]);
        let reach1 = anchor_reach(graph, &trim, &tree, data.pos[p], data.next_nearest_assigned[p]);
        let reach = reach0.min(reach1);
        if reach.is_finite() && reach <= max_dist {
            reachable.push((p, reach));
        }
    }

    let mut mixed_uses: HashMap<(HillMeasure, OrderedFloat<f64>), Vec<f64>> = HashMap::new();
    for &m in request.hill_measures {
        for &q in request.qs {
            mixed_uses.insert((m, OrderedFloat(q)), vec![0.0; d_count]);
        }
    }
    let mut other: HashMap<OtherMeasure, Vec<f64>> = HashMap::new();
    for &m in request.other_measures {
        other.insert(m, vec![0.0; d_count]);
    }
    let mut accessibility_weighted: HashMap<ClassId, Vec<f64>> = HashMap::new();
    let mut accessibility_non_weighted: HashMap<ClassId, Vec<f64>> = HashMap::new();
    for &c in request.accessibility_classes {
        accessibility_weighted.insert(c, vec![0.0; d_count]);
        accessibility_non_weighted.insert(c, vec![0.0; d_count]);
    }

    for (d_idx, &d) in d_values.iter().enumerate() {
        let beta_d = betas[d_idx];
        let within: Vec<(usize, f64)> = reachable.iter().filter(|&&(_, r)| r <= d).copied().collect();
        if within.is_empty() {
            continue;
        }

        accumulate_accessibility(&mut accessibility_weighted, &mut accessibility_non_weighted, data, &within, beta_d, d_idx);
        accumulate_hill(&mut mixed_uses, data, &within, beta_d, request, d_idx);
        accumulate_other(&mut other, data, &within, request.other_measures, request.disparity, d_idx);
    }

    SourceContribution { src: src.index(), mixed_uses, other, accessibility_weighted, accessibility_non_weighted }
}

/// Reach distance through a single anchor: Euclidean point-to-anchor
/// distance plus the anchor's own tree distance. `f64::INFINITY` if the
/// anchor is absent or unreached within the SPT's radius.
fn anchor_reach(graph: &Graph, trim: &TrimMap, tree: &Spt, point: streetnet_core::Point2, anchor: Option<NodeId>) -> f64 {
    let Some(anchor) = anchor else {
        return f64::INFINITY;
    };
    let Some(anchor_trim) = trim.full_to_trim[anchor.index()] else {
        return f64::INFINITY;
    };
    let anchor_trim = anchor_trim as usize;
    if !tree.is_reached(anchor_trim) {
        return f64::INFINITY;
    }
    point.distance(graph.node_pos[anchor.index()]) + tree.distance[anchor_trim]
}

fn accumulate_accessibility(
    weighted: &mut HashMap<ClassId, Vec<f64>>,
    non_weighted: &mut HashMap<ClassId, Vec<f64>>,
    data: &DataLayer,
    within: &[(usize, f64)],
    beta_d: f64,
    d_idx: usize,
) {
    for (class, nw_col) in non_weighted.iter_mut() {
        let w_col = weighted.get_mut(class).expect("allocated together");
        let (mut nw, mut w) = (0.0, 0.0);
        for &(p, reach) in within {
            if data.class_code[p] == *class {
                nw += 1.0;
                w += (beta_d * reach).exp();
            }
        }
        nw_col[d_idx] += nw;
        w_col[d_idx] += w;
    }
}

fn class_proportions(within: &[(usize, f64)], data: &DataLayer, n_classes: usize, weighted: bool, beta_d: f64) -> Vec<f64> {
    let mut abundance = vec![0.0; n_classes];
    for &(p, reach) in within {
        let c = data.class_code[p].index();
        abundance[c] += if weighted { (beta_d * reach).exp() } else { 1.0 };
    }
    let total: f64 = abundance.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }
    abundance.into_iter().filter(|&a| a > 0.0).map(|a| a / total).collect()
}

fn accumulate_hill(
    mixed_uses: &mut HashMap<(HillMeasure, OrderedFloat<f64>), Vec<f64>>,
    data: &DataLayer,
    within: &[(usize, f64)],
    beta_d: f64,
    request: &LanduseRequest,
    d_idx: usize,
) {
    if request.hill_measures.is_empty() {
        return;
    }
    let n_classes = within.iter().map(|&(p, _)| data.class_code[p].index()).max().map(|m| m + 1).unwrap_or(0);

    // Per-individual normalised weights, used by the pairwise measures.
    let total_weight: f64 = within.iter().map(|&(_, r)| (beta_d * r).exp()).sum();
    let weighted_probs: Vec<(usize, f64)> = within
        .iter()
        .map(|&(p, r)| (data.class_code[p].index(), if total_weight > 0.0 { (beta_d * r).exp() / total_weight } else { 0.0 }))
        .collect();

    for &q in request.qs {
        for &measure in request.hill_measures {
            let value = match measure {
                HillMeasure::Hill => {
                    let props = class_proportions(within, data, n_classes, false, beta_d);
                    hill_number(&props, q)
                }
                HillMeasure::HillBranchWt => {
                    let props = class_proportions(within, data, n_classes, true, beta_d);
                    hill_number(&props, q)
                }
                HillMeasure::HillPairwiseWt => functional_hill_number(&weighted_probs, binary_disparity, q),
                HillMeasure::HillPairwiseDisparity => {
                    let disparity = request.disparity.expect("validated at request time");
                    functional_hill_number(&weighted_probs, |a, b| disparity.get(ClassId(a as u32), ClassId(b as u32)), q)
                }
            };
            mixed_uses.get_mut(&(measure, OrderedFloat(q))).expect("pre-allocated")[d_idx] += value;
        }
    }
}

fn accumulate_other(
    other: &mut HashMap<OtherMeasure, Vec<f64>>,
    data: &DataLayer,
    within: &[(usize, f64)],
    measures: &[OtherMeasure],
    disparity: Option<&DisparityMatrix>,
    d_idx: usize,
) {
    if measures.is_empty() {
        return;
    }
    let n_classes = within.iter().map(|&(p, _)| data.class_code[p].index()).max().map(|m| m + 1).unwrap_or(0);
    let mut counts = vec![0.0; n_classes];
    for &(p, _) in within {
        counts[data.class_code[p].index()] += 1.0;
    }
    let total: f64 = counts.iter().sum();
    let props: Vec<f64> = if total > 0.0 {
        counts.iter().filter(|&&c| c > 0.0).map(|&c| c / total).collect()
    } else {
        Vec::new()
    };

    let uniform_probs: Vec<(usize, f64)> = within.iter().map(|&(p, _)| (data.class_code[p].index(), 1.0 / within.len() as f64)).collect();

    for &measure in measures {
        let value = match measure {
            OtherMeasure::Shannon => shannon(&props),
            OtherMeasure::GiniSimpson => gini_simpson(&props),
            OtherMeasure::RaosPairwiseDisparity => {
                let disparity = disparity.expect("validated at request time");
                rao_quadratic_entropy(&uniform_probs, |a, b| disparity.get(ClassId(a as u32), ClassId(b as u32)))
            }
        };
        other.get_mut(&measure).expect("pre-allocated")[d_idx] += value;
    }
}
