//! # blockcut 3D
//!
//! Greedy cutting of rectangular pieces from a 3D block.
//!
//! The crate is organized leaf-first:
//!
//! - [`Piece`] and [`Orientation`]: the cuboids to cut and their 6 axis permutations
//! - [`Region`] and [`FreeSpaceSet`]: free-space boxes and guillotine splitting
//! - [`Block`] and [`Container`]: the block description and its packing state
//! - [`Optimizer`]: the volume-first greedy loop producing a [`PackingReport`]
//!
//! ```rust
//! use blockcut_d3::{Block, Optimizer, Piece, Solver};
//!
//! let pieces = vec![Piece::new("A", 4.0, 4.0, 4.0)?];
//! let report = Optimizer::default_config().solve(&pieces, &Block::new(10.0, 10.0, 10.0))?;
//! assert_eq!(report.placed_count(), 1);
//! # Ok::<(), blockcut_d3::Error>(())
//! ```

pub mod boundary;
pub mod container;
pub mod free_space;
pub mod geometry;
pub mod optimizer;
pub mod region;

// Re-exports
pub use blockcut_core::{
    Config, Error, OrientationPolicy, PackingReport, Placement, Result, Solver, UnplacedPiece,
};
pub use boundary::Block;
pub use container::Container;
pub use free_space::FreeSpaceSet;
pub use geometry::{Orientation, Piece, PlacedPiece};
pub use optimizer::{Optimizer, Packing};
pub use region::Region;
