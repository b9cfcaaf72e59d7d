//! Mutable packing state of a block.

use crate::boundary::Block;
use crate::free_space::FreeSpaceSet;
use crate::geometry::{Piece, PlacedPiece};
use crate::region::Region;
use blockcut_core::geometry::{Boundary, Geometry};
use blockcut_core::{Error, Result};
use nalgebra::Vector3;

/// A block being filled: placed pieces, free space and occupied volume.
///
/// State only changes through [`Container::place`], which either commits
/// fully or leaves everything untouched.
#[derive(Debug, Clone)]
pub struct Container {
    block: Block,
    placed: Vec<PlacedPiece>,
    free_space: FreeSpaceSet,
    occupied_volume: f64,
    total_volume: f64,
}

impl Container {
    /// Creates an empty container whose free space is the whole block.
    ///
    /// Zero-volume blocks are accepted here so they can be inspected; they
    /// start without free space and reject every placement.
    pub fn new(block: &Block) -> Self {
        let whole = Region::new(Vector3::zeros(), *block.dimensions());
        Self {
            block: block.clone(),
            placed: Vec::new(),
            free_space: FreeSpaceSet::new(whole),
            occupied_volume: 0.0,
            total_volume: block.measure(),
        }
    }

    /// Returns the block description.
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Returns the placed pieces in commit order.
    pub fn placed(&self) -> &[PlacedPiece] {
        &self.placed
    }

    /// Returns the current free space.
    pub fn free_space(&self) -> &FreeSpaceSet {
        &self.free_space
    }

    /// Returns the sum of placed volumes.
    pub fn occupied_volume(&self) -> f64 {
        self.occupied_volume
    }

    /// Returns the block volume.
    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    /// Returns the number of placed pieces.
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Checks whether `piece` may be committed at `position`.
    ///
    /// Returns `Error::CannotPlace` naming the first rule that fails: block
    /// bounds, the height limit, then collision with placed pieces. The
    /// collision check runs against every placed piece regardless of what
    /// the free-space list says.
    pub fn check(&self, piece: &Piece, position: &Vector3<f64>) -> Result<()> {
        let footprint = Region::new(*position, *piece.dimensions());
        let end = footprint.max_corner();
        let dims = self.block.dimensions();

        // Written so that NaN coordinates fail the test.
        let inside = position.x >= 0.0
            && position.y >= 0.0
            && position.z >= 0.0
            && end.x <= dims.x
            && end.y <= dims.y
            && end.z <= dims.z;
        if !inside {
            return Err(Error::CannotPlace(format!(
                "'{}' at ({}, {}, {}) leaves the block",
                piece.id(),
                position.x,
                position.y,
                position.z
            )));
        }

        let under_limit = end.z <= self.block.height_limit();
        if !under_limit {
            return Err(Error::CannotPlace(format!(
                "'{}' reaches z = {} above the height limit {}",
                piece.id(),
                end.z,
                self.block.height_limit()
            )));
        }

        if let Some(other) = self
            .placed
            .iter()
            .find(|p| p.footprint().overlaps(&footprint))
        {
            return Err(Error::CannotPlace(format!(
                "'{}' collides with '{}'",
                piece.id(),
                other.piece().id()
            )));
        }

        Ok(())
    }

    /// Returns true if `piece` may be committed at `position`.
    pub fn can_place(&self, piece: &Piece, position: &Vector3<f64>) -> bool {
        self.check(piece, position).is_ok()
    }

    /// Commits `piece` at `position` if [`Container::can_place`] allows it.
    ///
    /// Returns false and leaves the container unchanged otherwise.
    pub fn place(&mut self, piece: &Piece, position: Vector3<f64>) -> bool {
        if let Err(e) = self.check(piece, &position) {
            log::trace!("{}", e);
            return false;
        }

        let placed = PlacedPiece::new(piece.clone(), position);
        let footprint = placed.footprint();
        self.placed.push(placed);
        self.occupied_volume += piece.volume();
        self.free_space.split(&footprint);

        log::trace!(
            "placed '{}' at ({}, {}, {}), {} free regions",
            piece.id(),
            position.x,
            position.y,
            position.z,
            self.free_space.len()
        );
        true
    }

    /// Occupied volume as a percentage of the block volume.
    ///
    /// Zero for a zero-volume or malformed block.
    pub fn utilization(&self) -> f64 {
        if self.total_volume > 0.0 {
            self.occupied_volume / self.total_volume * 100.0
        } else {
            0.0
        }
    }
}
