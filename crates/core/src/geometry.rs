//! Geometry and boundary traits shared by the packing crates.

/// Identifier of a piece.
pub type PieceId = String;

/// Something that can be placed inside a boundary.
pub trait Geometry {
    /// The scalar type for coordinates.
    type Scalar;

    /// Returns the identifier.
    fn id(&self) -> &PieceId;

    /// Returns the measure (volume in 3D).
    fn measure(&self) -> Self::Scalar;

    /// Returns the current extents, one per axis.
    fn extents(&self) -> Vec<Self::Scalar>;

    /// Validates the geometry.
    fn validate(&self) -> crate::Result<()>;
}

/// A container that geometries are placed into.
pub trait Boundary {
    /// The scalar type for coordinates.
    type Scalar;

    /// Returns the measure (volume in 3D).
    fn measure(&self) -> Self::Scalar;

    /// Validates the boundary.
    fn validate(&self) -> crate::Result<()>;

    /// Returns true if the point lies inside the boundary (inclusive).
    fn contains_point(&self, point: &[Self::Scalar]) -> bool;
}

/// Checks that an extent is strictly positive and finite.
///
/// `what` names the owner of the extent for the error message.
pub fn ensure_positive(what: &str, axis: &str, value: f64) -> crate::Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(crate::Error::InvalidDimension(format!(
            "{} of {} must be positive, got {}",
            axis, what, value
        )))
    }
}
