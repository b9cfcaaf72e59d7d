//! Free-space bookkeeping with guillotine splitting.
//!
//! Free space is a flat list of boxes. Placing a piece replaces every box it
//! overlaps with up to six slabs around it:
//!
//! - left/right of the piece on x, spanning the region's full y and z;
//! - front/back on y, limited to the x-span consumed by the piece;
//! - bottom/top on z, limited to the x- and y-spans consumed by the piece.
//!
//! The result is neither minimal nor disjoint. Slabs cut from different
//! regions can overlap each other, and the consumed span is computed as
//! `min(extent, piece_end - max(region_start, piece_start))`, which can reach
//! past the end of the original region. Placement outcomes depend on this
//! exact behaviour, so it is kept as is; the container's collision check is
//! what guarantees correctness.

use crate::region::Region;
use nalgebra::Vector3;

/// The set of currently available free regions, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FreeSpaceSet {
    regions: Vec<Region>,
}

impl FreeSpaceSet {
    /// Creates a set holding `initial`, or an empty set if it is degenerate.
    pub fn new(initial: Region) -> Self {
        let regions = if initial.is_degenerate() {
            Vec::new()
        } else {
            vec![initial]
        };
        Self { regions }
    }

    /// Returns the free regions in scan order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Returns an iterator over the free regions.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Returns the number of free regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if there is no free region left.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the origins of all regions that pass the fit test for `dims`.
    pub fn candidates(&self, dims: &Vector3<f64>) -> Vec<Vector3<f64>> {
        self.regions
            .iter()
            .filter(|r| r.fits(dims))
            .map(|r| r.origin)
            .collect()
    }

    /// Sum of region volumes. Overlapping slabs are counted more than once.
    pub fn total_volume(&self) -> f64 {
        self.regions.iter().map(Region::volume).sum()
    }

    /// Splits every region overlapped by `footprint` around it.
    pub fn split(&mut self, footprint: &Region) {
        let mut next = Vec::with_capacity(self.regions.len() + 6);

        for region in &self.regions {
            if region.overlaps(footprint) {
                split_region(region, footprint, &mut next);
            } else {
                next.push(*region);
            }
        }

        next.retain(|r| !r.is_degenerate());
        self.regions = next;
    }
}

/// Pushes the slabs of `region` left over around `piece` into `out`.
fn split_region(region: &Region, piece: &Region, out: &mut Vec<Region>) {
    let (rx, ry, rz) = (region.origin.x, region.origin.y, region.origin.z);
    let (rw, rh, rd) = (region.extents.x, region.extents.y, region.extents.z);
    let (px, py, pz) = (piece.origin.x, piece.origin.y, piece.origin.z);
    let end = piece.max_corner();

    // x: full y/z extents of the region
    if rx < px {
        out.push(Region::from_components(rx, ry, rz, px - rx, rh, rd));
    }
    if rx + rw > end.x {
        out.push(Region::from_components(
            end.x,
            ry,
            rz,
            rx + rw - end.x,
            rh,
            rd,
        ));
    }

    // y: restricted to the consumed x-span
    let sx = rx.max(px);
    let sw = rw.min(end.x - sx);
    if ry < py {
        out.push(Region::from_components(sx, ry, rz, sw, py - ry, rd));
    }
    if ry + rh > end.y {
        out.push(Region::from_components(
            sx,
            end.y,
            rz,
            sw,
            ry + rh - end.y,
            rd,
        ));
    }

    // z: restricted to the consumed x- and y-spans
    let sy = ry.max(py);
    let sh = rh.min(end.y - sy);
    if rz < pz {
        out.push(Region::from_components(sx, sy, rz, sw, sh, pz - rz));
    }
    if rz + rd > end.z {
        out.push(Region::from_components(
            sx,
            sy,
            end.z,
            sw,
            sh,
            rz + rd - end.z,
        ));
    }
}
