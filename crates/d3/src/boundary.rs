//! Block (container) description.

use blockcut_core::geometry::{ensure_positive, Boundary};
use blockcut_core::solver::DEFAULT_HEIGHT_LIMIT;
use blockcut_core::Result;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The block pieces are cut from.
///
/// `height_limit` is an absolute z ceiling applied on top of the block's own
/// depth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Block {
    /// Dimensions (width, height, depth).
    dimensions: Vector3<f64>,

    /// Maximum z reached by any footprint.
    height_limit: f64,
}

impl Block {
    /// Creates a new block with the default height limit.
    ///
    /// Dimensions are not checked here; see [`Boundary::validate`].
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            dimensions: Vector3::new(width, height, depth),
            height_limit: DEFAULT_HEIGHT_LIMIT,
        }
    }

    /// Sets the height limit.
    pub fn with_height_limit(mut self, limit: f64) -> Self {
        self.height_limit = limit;
        self
    }

    /// Returns the dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the depth.
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the height limit.
    pub fn height_limit(&self) -> f64 {
        self.height_limit
    }
}

impl Boundary for Block {
    type Scalar = f64;

    fn measure(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    fn validate(&self) -> Result<()> {
        ensure_positive("block", "width", self.dimensions.x)?;
        ensure_positive("block", "height", self.dimensions.y)?;
        ensure_positive("block", "depth", self.dimensions.z)?;
        ensure_positive("block", "height limit", self.height_limit)
    }

    fn contains_point(&self, point: &[f64]) -> bool {
        if point.len() < 3 {
            return false;
        }
        point[0] >= 0.0
            && point[0] <= self.dimensions.x
            && point[1] >= 0.0
            && point[1] <= self.dimensions.y
            && point[2] >= 0.0
            && point[2] <= self.dimensions.z
    }
}
