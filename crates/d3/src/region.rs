//! Axis-aligned boxes used for footprints and free space.

use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its origin (min corner) and extents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Min corner (x, y, z).
    pub origin: Vector3<f64>,
    /// Extents (width, height, depth).
    pub extents: Vector3<f64>,
}

impl Region {
    /// Creates a new region.
    pub fn new(origin: Vector3<f64>, extents: Vector3<f64>) -> Self {
        Self { origin, extents }
    }

    /// Creates a region from scalar components.
    pub fn from_components(x: f64, y: f64, z: f64, width: f64, height: f64, depth: f64) -> Self {
        Self::new(Vector3::new(x, y, z), Vector3::new(width, height, depth))
    }

    /// Returns the max corner.
    pub fn max_corner(&self) -> Vector3<f64> {
        self.origin + self.extents
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.extents.x * self.extents.y * self.extents.z
    }

    /// Returns true if any extent is zero, negative or NaN.
    pub fn is_degenerate(&self) -> bool {
        !(self.extents.x > 0.0 && self.extents.y > 0.0 && self.extents.z > 0.0)
    }

    /// Fit test: every extent of `dims` is at most the matching extent here.
    pub fn fits(&self, dims: &Vector3<f64>) -> bool {
        dims.x <= self.extents.x && dims.y <= self.extents.y && dims.z <= self.extents.z
    }

    /// Returns true if the two boxes overlap on all three axes.
    ///
    /// Boxes that only share a face, edge or corner do not overlap.
    pub fn overlaps(&self, other: &Region) -> bool {
        let a_max = self.max_corner();
        let b_max = other.max_corner();

        !(a_max.x <= other.origin.x
            || b_max.x <= self.origin.x
            || a_max.y <= other.origin.y
            || b_max.y <= self.origin.y
            || a_max.z <= other.origin.z
            || b_max.z <= self.origin.z)
    }

    /// Returns true if `other` lies entirely inside this region.
    pub fn contains(&self, other: &Region) -> bool {
        let a_max = self.max_corner();
        let b_max = other.max_corner();
        other.origin.x >= self.origin.x
            && other.origin.y >= self.origin.y
            && other.origin.z >= self.origin.z
            && b_max.x <= a_max.x
            && b_max.y <= a_max.y
            && b_max.z <= a_max.z
    }
}
