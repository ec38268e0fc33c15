//! Unit tests for streetnet-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ClassId, EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(ClassId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point2;

    #[test]
    fn zero_distance() {
        let p = Point2::new(600_000.0, 6_000_000.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn bbox_check() {
        let center = Point2::new(1000.0, 2000.0);
        let nearby = Point2::new(1005.0, 2003.0);
        let far = Point2::new(1500.0, 2000.0);
        assert!(nearby.within_bbox(center, 10.0));
        assert!(!far.within_bbox(center, 10.0));
    }

    #[test]
    fn finiteness() {
        assert!(Point2::new(1.0, 1.0).is_finite());
        assert!(!Point2::new(f64::NAN, 1.0).is_finite());
        assert!(!Point2::new(1.0, f64::INFINITY).is_finite());
    }
}

#[cfg(test)]
mod mode {
    use crate::SptMode;

    #[test]
    fn angular_flag() {
        assert!(!SptMode::Metric.is_angular());
        assert!(SptMode::Angular.is_angular());
    }

    #[test]
    fn display() {
        assert_eq!(SptMode::Metric.to_string(), "metric");
        assert_eq!(SptMode::Angular.to_string(), "angular");
    }
}

#[cfg(test)]
mod config {
    use crate::Distances;
    use crate::config::{W_MIN, beta_from_distance, distance_from_beta};

    #[test]
    fn w_min_matches_e_minus_4() {
        assert!((W_MIN - (-4.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn beta_distance_round_trip() {
        let beta = beta_from_distance(400.0);
        let back = distance_from_beta(beta);
        assert_eq!(back, 400.0);
    }

    #[test]
    fn gravity_decay_example() {
        // beta tuned so that d=400 decays to w_min; at impedance=200 that's
        // halfway, so exp(beta * 200) should equal exp(-2).
        let beta = beta_from_distance(400.0);
        let v = (beta * 200.0).exp();
        assert!((v - (-2.0f64).exp()).abs() < 1e-9);
    }

    #[test]
    fn distances_sorted_and_deduped() {
        let d = Distances::new(vec![800.0, 200.0, 400.0, 200.0]).unwrap();
        assert_eq!(d.as_slice(), &[200.0, 400.0, 800.0]);
        assert_eq!(d.max(), 800.0);
    }

    #[test]
    fn distances_rejects_non_positive() {
        assert!(Distances::new(vec![0.0]).is_err());
        assert!(Distances::new(vec![-10.0]).is_err());
        assert!(Distances::new(vec![f64::NAN]).is_err());
        assert!(Distances::new(vec![]).is_err());
    }

    #[test]
    fn distances_from_betas() {
        let d = Distances::from_betas(&[-0.02]).unwrap();
        // ln(w_min)/-0.02 = -4/-0.02 = 200
        assert_eq!(d.as_slice(), &[200.0]);
    }
}
