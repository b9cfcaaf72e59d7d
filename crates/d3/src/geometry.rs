//! Piece geometry and axis-aligned orientations.

use blockcut_core::geometry::{ensure_positive, Geometry, PieceId};
use blockcut_core::Result;
use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the 6 ways to assign a piece's extents to the (width, height, depth) axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// (w, h, d) - as given.
    #[default]
    Whd,
    /// (w, d, h) - rotated 90° around X.
    Wdh,
    /// (h, w, d) - rotated 90° around Z.
    Hwd,
    /// (h, d, w)
    Hdw,
    /// (d, w, h)
    Dwh,
    /// (d, h, w) - rotated 90° around Y.
    Dhw,
}

impl Orientation {
    /// All orientations in canonical order.
    pub const ALL: [Orientation; 6] = [
        Orientation::Whd,
        Orientation::Wdh,
        Orientation::Hwd,
        Orientation::Hdw,
        Orientation::Dwh,
        Orientation::Dhw,
    ];

    /// Returns the orientation at `index` in canonical order, wrapping around.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Position of this orientation in [`Orientation::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Whd => 0,
            Self::Wdh => 1,
            Self::Hwd => 2,
            Self::Hdw => 3,
            Self::Dwh => 4,
            Self::Dhw => 5,
        }
    }

    /// Source axis for each target axis.
    fn axes(self) -> (usize, usize, usize) {
        match self {
            Self::Whd => (0, 1, 2),
            Self::Wdh => (0, 2, 1),
            Self::Hwd => (1, 0, 2),
            Self::Hdw => (1, 2, 0),
            Self::Dwh => (2, 0, 1),
            Self::Dhw => (2, 1, 0),
        }
    }

    /// Permutes `dims` according to this orientation.
    pub fn apply(self, dims: &Vector3<f64>) -> Vector3<f64> {
        let (x, y, z) = self.axes();
        Vector3::new(dims[x], dims[y], dims[z])
    }
}

/// A rectangular cuboid to be cut from the block.
///
/// Dimensions are validated at construction and never change afterwards;
/// [`Piece::reoriented`] produces a new value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    /// Unique identifier.
    id: PieceId,

    /// Extents as given at construction (width, height, depth).
    original: Vector3<f64>,

    /// Effective extents for the current orientation.
    dimensions: Vector3<f64>,

    /// Orientation relative to `original`.
    orientation: Orientation,

    /// Volume, computed once.
    volume: f64,
}

impl Piece {
    /// Creates a new piece.
    ///
    /// Fails with `InvalidDimension` unless every extent is strictly positive.
    pub fn new(id: impl Into<PieceId>, width: f64, height: f64, depth: f64) -> Result<Self> {
        let id = id.into();
        let owner = format!("piece '{}'", id);
        ensure_positive(&owner, "width", width)?;
        ensure_positive(&owner, "height", height)?;
        ensure_positive(&owner, "depth", depth)?;

        let dimensions = Vector3::new(width, height, depth);
        Ok(Self {
            id,
            original: dimensions,
            dimensions,
            orientation: Orientation::Whd,
            volume: width * height * depth,
        })
    }

    /// Returns a copy of this piece in `orientation`, relative to the original extents.
    pub fn reoriented(&self, orientation: Orientation) -> Piece {
        Piece {
            id: self.id.clone(),
            original: self.original,
            dimensions: orientation.apply(&self.original),
            orientation,
            volume: self.volume,
        }
    }

    /// Returns the effective dimensions (width, height, depth).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the extents as given at construction.
    pub fn original_dimensions(&self) -> &Vector3<f64> {
        &self.original
    }

    /// Returns the current orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the effective width (x extent).
    pub fn width(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the effective height (y extent).
    pub fn height(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the effective depth (z extent).
    pub fn depth(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.volume
    }
}

impl Geometry for Piece {
    type Scalar = f64;

    fn id(&self) -> &PieceId {
        &self.id
    }

    fn measure(&self) -> f64 {
        self.volume
    }

    fn extents(&self) -> Vec<f64> {
        vec![self.dimensions.x, self.dimensions.y, self.dimensions.z]
    }

    fn validate(&self) -> Result<()> {
        let owner = format!("piece '{}'", self.id);
        ensure_positive(&owner, "width", self.dimensions.x)?;
        ensure_positive(&owner, "height", self.dimensions.y)?;
        ensure_positive(&owner, "depth", self.dimensions.z)
    }
}

/// A piece committed at a position inside the block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPiece {
    piece: Piece,
    position: Vector3<f64>,
}

impl PlacedPiece {
    pub(crate) fn new(piece: Piece, position: Vector3<f64>) -> Self {
        Self { piece, position }
    }

    /// Returns the oriented piece.
    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    /// Returns the origin (min corner).
    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    /// Returns the occupied box.
    pub fn footprint(&self) -> crate::region::Region {
        crate::region::Region::new(self.position, *self.piece.dimensions())
    }

    /// Converts into the report representation.
    pub fn to_placement(&self) -> blockcut_core::Placement {
        let d = self.piece.dimensions();
        blockcut_core::Placement::new(
            self.piece.id().clone(),
            [self.position.x, self.position.y, self.position.z],
            [d.x, d.y, d.z],
        )
        .with_orientation_index(self.piece.orientation().index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_piece_volume() {
        let piece = Piece::new("P1", 10.0, 20.0, 30.0).unwrap();
        assert_relative_eq!(piece.volume(), 6000.0, epsilon = 0.001);
        assert_relative_eq!(piece.measure(), 6000.0, epsilon = 0.001);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Piece::new("P", 0.0, 1.0, 1.0).is_err());
        assert!(Piece::new("P", 1.0, -1.0, 1.0).is_err());
        assert!(Piece::new("P", 1.0, 1.0, f64::NAN).is_err());

        let err = Piece::new("P", 1.0, 1.0, 0.0).unwrap_err();
        assert!(matches!(err, blockcut_core::Error::InvalidDimension(_)));
    }

    #[test]
    fn test_orientation_permutations() {
        let dims = Vector3::new(1.0, 2.0, 3.0);
        let got: Vec<_> = Orientation::ALL.iter().map(|o| o.apply(&dims)).collect();
        assert_eq!(got[0], Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(got[1], Vector3::new(1.0, 3.0, 2.0));
        assert_eq!(got[2], Vector3::new(2.0, 1.0, 3.0));
        assert_eq!(got[3], Vector3::new(2.0, 3.0, 1.0));
        assert_eq!(got[4], Vector3::new(3.0, 1.0, 2.0));
        assert_eq!(got[5], Vector3::new(3.0, 2.0, 1.0));

        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.index(), i);
            assert_eq!(Orientation::from_index(i), *o);
        }
        assert_eq!(Orientation::from_index(7), Orientation::Wdh);
    }

    #[test]
    fn test_reorient_keeps_volume_and_original() {
        let piece = Piece::new("P", 4.0, 5.0, 6.0).unwrap();
        for o in Orientation::ALL {
            let rotated = piece.reoriented(o);
            assert_relative_eq!(rotated.volume(), piece.volume());
            assert_relative_eq!(
                rotated.width() * rotated.height() * rotated.depth(),
                piece.volume()
            );
            assert_eq!(rotated.id(), piece.id());
            assert_eq!(rotated.orientation(), o);
            assert_eq!(rotated.original_dimensions(), piece.dimensions());
        }
        // Original is untouched.
        assert_eq!(piece.dimensions(), &Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(piece.orientation(), Orientation::Whd);
    }

    #[test]
    fn test_reorient_is_relative_to_original() {
        let piece = Piece::new("P", 1.0, 2.0, 3.0).unwrap();
        let twice = piece
            .reoriented(Orientation::Dhw)
            .reoriented(Orientation::Wdh);
        assert_eq!(twice.dimensions(), &Vector3::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_placed_piece_to_placement() {
        let piece = Piece::new("P", 1.0, 2.0, 3.0)
            .unwrap()
            .reoriented(Orientation::Hwd);
        let placed = PlacedPiece::new(piece, Vector3::new(5.0, 0.0, 1.0));
        let placement = placed.to_placement();
        assert_eq!(placement.piece_id, "P");
        assert_eq!(placement.position, [5.0, 0.0, 1.0]);
        assert_eq!(placement.dimensions, [2.0, 1.0, 3.0]);
        assert_eq!(placement.orientation_index, Some(2));
    }
}
