//! Shortest-path tree traversal mode.
//!
//! All variants are always compiled in (no per-variant feature flags), the
//! same policy the teacher framework applies to its mode enums.

/// Selects how the shortest-path tree (§4.4) accumulates impedance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SptMode {
    /// Impedance is the edge's `impedance` field (typically equal to length).
    #[default]
    Metric,
    /// Impedance accumulates turn-cost deviation angles between successive
    /// edges; `distance` still tracks metric length for the radius gate.
    Angular,
}

impl SptMode {
    #[inline]
    pub fn is_angular(self) -> bool {
        matches!(self, SptMode::Angular)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SptMode::Metric => "metric",
            SptMode::Angular => "angular",
        }
    }
}

impl std::fmt::Display for SptMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
