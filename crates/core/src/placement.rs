//! Placement representation for positioned pieces.

use crate::geometry::PieceId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piece committed inside the block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The ID of the placed piece.
    pub piece_id: PieceId,

    /// Origin (min corner) of the footprint: x, y, z.
    pub position: [f64; 3],

    /// Effective (post-rotation) extents: width, height, depth.
    pub dimensions: [f64; 3],

    /// Index of the axis permutation used, if known.
    pub orientation_index: Option<usize>,
}

impl Placement {
    /// Creates a new placement.
    pub fn new(piece_id: PieceId, position: [f64; 3], dimensions: [f64; 3]) -> Self {
        Self {
            piece_id,
            position,
            dimensions,
            orientation_index: None,
        }
    }

    /// Sets the orientation index.
    pub fn with_orientation_index(mut self, index: usize) -> Self {
        self.orientation_index = Some(index);
        self
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> f64 {
        self.position[0]
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> f64 {
        self.position[1]
    }

    /// Returns the z coordinate.
    pub fn z(&self) -> f64 {
        self.position[2]
    }

    /// Returns the max corner of the footprint.
    pub fn max_corner(&self) -> [f64; 3] {
        [
            self.position[0] + self.dimensions[0],
            self.position[1] + self.dimensions[1],
            self.position[2] + self.dimensions[2],
        ]
    }

    /// Returns the volume of the footprint.
    pub fn volume(&self) -> f64 {
        self.dimensions.iter().product()
    }
}

/// A piece that could not be placed, reported in its original form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnplacedPiece {
    /// The ID of the piece.
    pub piece_id: PieceId,
    /// Original (unrotated) extents: width, height, depth.
    pub dimensions: [f64; 3],
}

impl UnplacedPiece {
    /// Creates a new unplaced record.
    pub fn new(piece_id: PieceId, dimensions: [f64; 3]) -> Self {
        Self {
            piece_id,
            dimensions,
        }
    }

    /// Returns the volume of the piece.
    pub fn volume(&self) -> f64 {
        self.dimensions.iter().product()
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of placements that kept the input orientation.
    pub unrotated_count: usize,
    /// Highest z reached by any footprint.
    pub max_z: f64,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if p.orientation_index == Some(0) {
                stats.unrotated_count += 1;
            }
            stats.max_z = stats.max_z.max(p.max_corner()[2]);
        }

        stats
    }
}
