//! Deterministic test fixtures (§8: "seed = 25 in `mock_graph`, mock data
//! dict on 50 points"), in the spirit of the upstream `util.mock` module: a
//! small jittered street grid plus a scattering of classed data points.

use rand::Rng;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use streetnet_spatial::Graph;

use crate::data::DataFacade;
use crate::error::FacadeResult;
use crate::network::{NetworkFacade, RawEdge};

/// An 8x8 street grid, `spacing` metres apart, with node positions jittered
/// by up to `jitter` metres — deterministic for a given `seed`.
pub fn mock_graph(seed: u64) -> FacadeResult<NetworkFacade> {
    mock_graph_sized(seed, 8, 8, 100.0, 15.0)
}

/// As [`mock_graph`], with explicit grid dimensions and geometry.
pub fn mock_graph_sized(seed: u64, rows: usize, cols: usize, spacing: f64, jitter: f64) -> FacadeResult<NetworkFacade> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let n = rows * cols;
    let mut uids = Vec::with_capacity(n);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    let mut live = Vec::with_capacity(n);
    let mut ghosted = Vec::with_capacity(n);
    let mut weight = Vec::with_capacity(n);

    for r in 0..rows {
        for c in 0..cols {
            uids.push(format!("n{}", r * cols + c));
            let dx: f64 = rng.gen_range(-jitter..jitter);
            let dy: f64 = rng.gen_range(-jitter..jitter);
            xs.push(c as f64 * spacing + dx);
            ys.push(r as f64 * spacing + dy);
            live.push(true);
            ghosted.push(false);
            weight.push(None);
        }
    }

    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let idx = r * cols + c;
            if c + 1 < cols {
                push_segment(&xs, &ys, idx, r * cols + c + 1, &mut edges);
            }
            if r + 1 < rows {
                push_segment(&xs, &ys, idx, (r + 1) * cols + c, &mut edges);
            }
        }
    }

    NetworkFacade::graph_from_arrays(uids, xs, ys, live, ghosted, weight, edges)
}

fn push_segment(xs: &[f64], ys: &[f64], a: usize, b: usize, edges: &mut Vec<RawEdge>) {
    let len = ((xs[a] - xs[b]).powi(2) + (ys[a] - ys[b]).powi(2)).sqrt();
    edges.push(RawEdge { from: a, to: b, length: len, impedance: len });
    edges.push(RawEdge { from: b, to: a, length: len, impedance: len });
}

/// `count` data points scattered uniformly over `network`'s bounding box,
/// classed from a small fixed label pool.
pub fn mock_data(seed: u64, count: usize, network: &NetworkFacade) -> FacadeResult<DataFacade> {
    const LABELS: [&str; 5] = ["shop", "cafe", "office", "residential", "park"];

    let mut rng = SmallRng::seed_from_u64(seed);
    let (min_x, max_x, min_y, max_y) = bounding_box(&network.graph);

    let mut uids = Vec::with_capacity(count);
    let mut xs = Vec::with_capacity(count);
    let mut ys = Vec::with_capacity(count);
    let mut live = Vec::with_capacity(count);
    let mut class_labels = Vec::with_capacity(count);

    for i in 0..count {
        uids.push(format!("d{i}"));
        xs.push(rng.gen_range(min_x..=max_x));
        ys.push(rng.gen_range(min_y..=max_y));
        live.push(true);
        class_labels.push(LABELS[rng.gen_range(0..LABELS.len())].to_string());
    }

    DataFacade::from_arrays(uids, xs, ys, live, class_labels)
}

fn bounding_box(graph: &Graph) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in &graph.node_pos {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    (min_x, max_x, min_y, max_y)
}
