//! Packing report representation.

use crate::placement::{Placement, PlacementStats, UnplacedPiece};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a packing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingReport {
    /// Committed placements, in commit order.
    pub placements: Vec<Placement>,

    /// Pieces that could not be placed, in original form.
    pub unplaced: Vec<UnplacedPiece>,

    /// Utilization percentage (0.0 - 100.0).
    /// Calculated as: occupied_volume / total_volume * 100
    pub utilization: f64,

    /// Sum of the volumes of all placed pieces.
    pub occupied_volume: f64,

    /// Volume of the block.
    pub total_volume: f64,

    /// Height limit the run was checked against.
    pub height_limit: f64,

    /// Orientation policy used.
    pub strategy: Option<String>,

    /// Seed of the pseudo-random orientation source, when one was used.
    pub seed: Option<u64>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Whether the run was cut short by cancellation or its time limit.
    pub cancelled: bool,
}

impl PackingReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            unplaced: Vec::new(),
            utilization: 0.0,
            occupied_volume: 0.0,
            total_volume: 0.0,
            height_limit: crate::solver::DEFAULT_HEIGHT_LIMIT,
            strategy: None,
            seed: None,
            computation_time_ms: 0,
            cancelled: false,
        }
    }

    /// Returns true if all pieces were placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the number of placed pieces.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of unplaced pieces.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns true if at least one piece was placed.
    pub fn is_successful(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Returns true if the run resolved every piece without being cut short.
    pub fn completed_normally(&self) -> bool {
        !self.cancelled
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization)
    }

    /// Returns true if `self` is a better outcome than `other`.
    ///
    /// Higher utilization wins, then more placed pieces.
    pub fn is_better_than(&self, other: &PackingReport) -> bool {
        if (self.utilization - other.utilization).abs() > 1e-9 {
            return self.utilization > other.utilization;
        }
        self.placed_count() > other.placed_count()
    }
}

impl Default for PackingReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a packing report.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportSummary {
    /// Total pieces requested.
    pub total_requested: usize,
    /// Total pieces placed.
    pub total_placed: usize,
    /// Total pieces left unplaced.
    pub total_unplaced: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Occupied volume.
    pub occupied_volume: f64,
    /// Block volume.
    pub total_volume: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&PackingReport> for ReportSummary {
    fn from(report: &PackingReport) -> Self {
        Self {
            total_requested: report.placements.len() + report.unplaced.len(),
            total_placed: report.placements.len(),
            total_unplaced: report.unplaced.len(),
            utilization_percent: report.utilization,
            occupied_volume: report.occupied_volume,
            total_volume: report.total_volume,
            time_ms: report.computation_time_ms,
            strategy: report
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
