use serde::{Deserialize, Serialize};

/// Options controlling [`analyze`](crate::analyze).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of lowest-capacity routes to report.
    pub low_capacity_routes: usize,
    /// Whether to extract the minimum cut certifying the maximum flow.
    pub min_cut: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            low_capacity_routes: 4,
            min_cut: true,
        }
    }
}
