//! Centrality measure selection as a tagged variant set (§9 design note).

/// The centrality measures the aggregator can compute (§4.6).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    NodeDensity,
    FarnessImpedance,
    FarnessDistance,
    HarmonicCloseness,
    /// Derived post-hoc from `NodeDensity` and `FarnessDistance`, never
    /// accumulated directly per reached node.
    ImprovedCloseness,
    Gravity,
    Cycles,
    /// Accumulates on intermediate nodes along each reached node's
    /// predecessor chain, not on the source.
    Betweenness,
    /// Same walk as `Betweenness`, weighted by the gravity decay term.
    BetweennessGravity,
}

impl Measure {
    pub fn is_betweenness(&self) -> bool {
        matches!(self, Measure::Betweenness | Measure::BetweennessGravity)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Measure::NodeDensity => "node_density",
            Measure::FarnessImpedance => "farness_impedance",
            Measure::FarnessDistance => "farness_distance",
            Measure::HarmonicCloseness => "harmonic_closeness",
            Measure::ImprovedCloseness => "improved_closeness",
            Measure::Gravity => "gravity",
            Measure::Cycles => "cycles",
            Measure::Betweenness => "betweenness",
            Measure::BetweennessGravity => "betweenness_gravity",
        }
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
