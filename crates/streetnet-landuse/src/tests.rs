//! Unit tests for streetnet-landuse.

#[cfg(test)]
mod helpers {
    use streetnet_core::{ClassId, Point2};
    use streetnet_spatial::{Graph, GraphBuilder};

    use crate::data::DataLayer;

    /// Two nodes 200m apart, with one data point at each end classed "a" and
    /// "b" respectively.
    pub fn two_class_graph() -> (Graph, DataLayer) {
        let mut b = GraphBuilder::new();
        let n0 = b.add_node(Point2::new(0.0, 0.0), true, false, None);
        let n1 = b.add_node(Point2::new(200.0, 0.0), true, false, None);
        b.add_segment(n0, n1, 200.0, 200.0);
        let graph = b.build().unwrap();

        let pos = vec![Point2::new(10.0, 0.0), Point2::new(190.0, 0.0)];
        let live = vec![true, true];
        let class_code = vec![ClassId(0), ClassId(1)];
        let data = DataLayer::new(pos, live, class_code).unwrap();
        (graph, data)
    }
}

#[cfg(test)]
mod classes {
    use crate::classes::ClassTable;

    #[test]
    fn encode_decode_round_trips() {
        let table = ClassTable::from_labels(["shop".to_string(), "cafe".to_string(), "shop".to_string()]);
        assert_eq!(table.len(), 2);
        let id = table.encode("cafe").unwrap();
        assert_eq!(table.decode(id), "cafe");
        assert!(table.encode("bar").is_err());
    }
}

#[cfg(test)]
mod diversity {
    use crate::diversity::{gini_simpson, hill_number, shannon};

    #[test]
    fn empty_reach_set_is_zero() {
        assert_eq!(hill_number(&[], 0.0), 0.0);
        assert_eq!(shannon(&[]), 0.0);
    }

    #[test]
    fn single_class_has_no_diversity() {
        assert_eq!(hill_number(&[1.0], 0.0), 1.0);
        assert_eq!(shannon(&[1.0]), 0.0);
        assert_eq!(gini_simpson(&[1.0]), 0.0);
    }

    #[test]
    fn two_even_classes_hill_zero_equals_class_count() {
        let props = vec![0.5, 0.5];
        assert!((hill_number(&props, 0.0) - 2.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod aggregation {
    use streetnet_core::Distances;

    use crate::aggregate::{LanduseRequest, compute_landuses};
    use crate::measure::HillMeasure;
    use crate::tests::helpers::two_class_graph;

    #[test]
    fn only_one_class_reachable_at_short_radius() {
        let (graph, mut data) = two_class_graph();
        data.assign_to_network(&graph, 50.0);
        let distances = Distances::new(vec![30.0, 400.0]).unwrap();
        let request = LanduseRequest {
            hill_measures: &[HillMeasure::Hill],
            other_measures: &[],
            accessibility_classes: &[],
            qs: &[0.0],
            disparity: None,
        };
        let results = compute_landuses(&graph, &data, &request, &distances, false, false).unwrap();

        // At 30m from node 0, only the co-located data point (class "a") is
        // in reach: diversity collapses to a single class.
        let near = results.mixed_use(HillMeasure::Hill, 0.0, 0, 0).unwrap();
        assert!((near - 1.0).abs() < 1e-9, "near={near}");

        // At 400m both classes are reachable from either end.
        let far = results.mixed_use(HillMeasure::Hill, 0.0, 1, 0).unwrap();
        assert!((far - 2.0).abs() < 1e-9, "far={far}");
    }

    #[test]
    fn accessibility_counts_reachable_class() {
        use crate::aggregate::LanduseRequest;
        use streetnet_core::ClassId;

        let (graph, mut data) = two_class_graph();
        data.assign_to_network(&graph, 50.0);
        let distances = Distances::new(vec![400.0]).unwrap();
        let request = LanduseRequest {
            hill_measures: &[],
            other_measures: &[],
            accessibility_classes: &[ClassId(0)],
            qs: &[],
            disparity: None,
        };
        let results = compute_landuses(&graph, &data, &request, &distances, false, false).unwrap();
        let count = results.accessibility_non_weighted.get(&ClassId(0)).unwrap()[0][0];
        assert_eq!(count, 1.0);
    }

    #[test]
    fn errors_before_assignment() {
        let (graph, data) = two_class_graph();
        let distances = Distances::new(vec![400.0]).unwrap();
        let request = LanduseRequest {
            hill_measures: &[HillMeasure::Hill],
            other_measures: &[],
            accessibility_classes: &[],
            qs: &[0.0],
            disparity: None,
        };
        let err = compute_landuses(&graph, &data, &request, &distances, false, false).unwrap_err();
        assert!(matches!(err, crate::error::LanduseError::Usage(_)));
    }

    #[test]
    fn errors_on_empty_metric_selection() {
        let (graph, mut data) = two_class_graph();
        data.assign_to_network(&graph, 50.0);
        let distances = Distances::new(vec![400.0]).unwrap();
        let request = LanduseRequest {
            hill_measures: &[],
            other_measures: &[],
            accessibility_classes: &[],
            qs: &[],
            disparity: None,
        };
        let err = compute_landuses(&graph, &data, &request, &distances, false, false).unwrap_err();
        assert!(matches!(err, crate::error::LanduseError::Usage(_)));
    }

    #[test]
    fn errors_when_pairwise_disparity_requested_without_matrix() {
        let (graph, mut data) = two_class_graph();
        data.assign_to_network(&graph, 50.0);
        let distances = Distances::new(vec![400.0]).unwrap();
        let request = LanduseRequest {
            hill_measures: &[HillMeasure::HillPairwiseDisparity],
            other_measures: &[],
            accessibility_classes: &[],
            qs: &[0.0],
            disparity: None,
        };
        let err = compute_landuses(&graph, &data, &request, &distances, false, false).unwrap_err();
        assert!(matches!(err, crate::error::LanduseError::Usage(_)));
    }
}
