//! Mixed-use and accessibility measure selection as tagged variant sets
//! (§9 design note): string-keyed metric selection becomes a closed enum.

/// Hill-number-family mixed-use measures, each evaluated at every requested
/// `q` (§4.7).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HillMeasure {
    /// Classical Hill diversity over class proportions.
    Hill,
    /// Hill diversity over distance-decay-weighted proportions.
    HillBranchWt,
    /// Chiu-Jost-Chao functional Hill number with binary class dissimilarity.
    HillPairwiseWt,
    /// As `HillPairwiseWt`, but using a caller-supplied disparity matrix.
    HillPairwiseDisparity,
}

impl HillMeasure {
    pub fn requires_disparity_matrix(self) -> bool {
        matches!(self, HillMeasure::HillPairwiseDisparity)
    }

    pub fn name(self) -> &'static str {
        match self {
            HillMeasure::Hill => "hill",
            HillMeasure::HillBranchWt => "hill_branch_wt",
            HillMeasure::HillPairwiseWt => "hill_pairwise_wt",
            HillMeasure::HillPairwiseDisparity => "hill_pairwise_disparity",
        }
    }
}

/// Non-Hill diversity measures (§4.7).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OtherMeasure {
    Shannon,
    GiniSimpson,
    RaosPairwiseDisparity,
}

impl OtherMeasure {
    pub fn requires_disparity_matrix(self) -> bool {
        matches!(self, OtherMeasure::RaosPairwiseDisparity)
    }

    pub fn name(self) -> &'static str {
        match self {
            OtherMeasure::Shannon => "shannon",
            OtherMeasure::GiniSimpson => "gini_simpson",
            OtherMeasure::RaosPairwiseDisparity => "raos_pairwise_disparity",
        }
    }
}
