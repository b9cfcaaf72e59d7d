//! Solver traits and configuration.

use crate::geometry::{Boundary, Geometry};
use crate::result::PackingReport;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute ceiling on the z-extent of any placement.
pub const DEFAULT_HEIGHT_LIMIT: f64 = 150.0;

/// Number of orientation tries made for each piece before giving up on it.
pub const ORIENTATION_ATTEMPTS: usize = 6;

/// How the orientation for each placement try is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrientationPolicy {
    /// Try each of the 6 axis permutations exactly once, in canonical order.
    #[default]
    Exhaustive,
    /// Sample a permutation uniformly on every try (repeats allowed).
    ///
    /// With `seed: None` a seed is drawn from entropy; the seed actually used
    /// is recorded in the report either way.
    Random {
        /// Seed for the pseudo-random source.
        seed: Option<u64>,
    },
}

impl OrientationPolicy {
    /// Short name used in reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::Random { .. } => "random",
        }
    }
}

/// Common configuration for solvers.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Orientation selection policy.
    pub orientation: OrientationPolicy,

    /// Maximum computation time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: OrientationPolicy::default(),
            time_limit_ms: 0,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation policy.
    pub fn with_orientation(mut self, policy: OrientationPolicy) -> Self {
        self.orientation = policy;
        self
    }

    /// Shorthand for a seeded random orientation policy.
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_orientation(OrientationPolicy::Random { seed: Some(seed) })
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }
}

/// Progress callback for long-running operations.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information during solving.
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// Pieces resolved so far (placed or unplaced).
    pub processed: usize,
    /// Total pieces in the run.
    pub total: usize,
    /// Pieces placed so far.
    pub placed: usize,
    /// Current utilization in percent.
    pub utilization: f64,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Whether the solver is still running.
    pub running: bool,
}

/// Trait for packing solvers.
pub trait Solver {
    /// The geometry type this solver handles.
    type Geometry: Geometry;
    /// The boundary type this solver handles.
    type Boundary: Boundary;

    /// Solves the packing problem.
    fn solve(
        &self,
        geometries: &[Self::Geometry],
        boundary: &Self::Boundary,
    ) -> Result<PackingReport>;

    /// Solves with a progress callback.
    fn solve_with_progress(
        &self,
        geometries: &[Self::Geometry],
        boundary: &Self::Boundary,
        callback: ProgressCallback,
    ) -> Result<PackingReport>;

    /// Cancels an ongoing solve operation.
    fn cancel(&self);
}
