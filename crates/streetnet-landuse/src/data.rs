//! Packed data-point arrays and network assignment (§3, §4.5, §6).

use streetnet_core::{ClassId, NodeId, Point2};
use streetnet_spatial::{Graph, assign_all};

use crate::error::{LanduseError, LanduseResult};

/// Data record (§3): `x, y, live, class_code, nearest_assigned,
/// next_nearest_assigned`. `nearest_assigned`/`next_nearest_assigned` start
/// out unassigned and are populated by [`DataLayer::assign_to_network`].
pub struct DataLayer {
    pub pos: Vec<Point2>,
    pub live: Vec<bool>,
    pub class_code: Vec<ClassId>,
    pub nearest_assigned: Vec<Option<NodeId>>,
    pub next_nearest_assigned: Vec<Option<NodeId>>,
    assigned: bool,
}

impl DataLayer {
    /// Build a data layer from positions and encoded class codes, with
    /// anchors unassigned.
    pub fn new(pos: Vec<Point2>, live: Vec<bool>, class_code: Vec<ClassId>) -> LanduseResult<Self> {
        if pos.len() != live.len() || pos.len() != class_code.len() {
            return Err(LanduseError::Validation(format!(
                "data column length mismatch: pos={} live={} class_code={}",
                pos.len(),
                live.len(),
                class_code.len()
            )));
        }
        for (i, p) in pos.iter().enumerate() {
            if !p.is_finite() {
                return Err(LanduseError::Validation(format!("data point {i} has non-finite coordinates")));
            }
        }
        let n = pos.len();
        Ok(Self {
            pos,
            live,
            class_code,
            nearest_assigned: vec![None; n],
            next_nearest_assigned: vec![None; n],
            assigned: false,
        })
    }

    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned
    }

    /// `data.assign_to_network(network, max_assign_dist)` (§6): mutate the
    /// anchor columns in place via the walk search (§4.5).
    pub fn assign_to_network(&mut self, graph: &Graph, max_assign_dist: f64) {
        let anchors = assign_all(graph, &self.pos, max_assign_dist);
        for (i, a) in anchors.into_iter().enumerate() {
            self.nearest_assigned[i] = a.nearest;
            self.next_nearest_assigned[i] = a.next_nearest;
        }
        self.assigned = true;
    }
}
