//! # blockcut core
//!
//! Core traits and abstractions for the blockcut cutting/packing optimizer.
//!
//! This crate provides the types shared between the 3D packing engine and its
//! front ends.
//!
//! ## Core Components
//!
//! - **Geometry traits**: `Geometry`, `Boundary`
//! - **Solver trait**: Common interface for packing algorithms
//! - **Reports**: `Placement`, `UnplacedPiece`, `PackingReport`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{ensure_positive, Boundary, Geometry, PieceId};
pub use placement::{Placement, PlacementStats, UnplacedPiece};
pub use result::{PackingReport, ReportSummary};
pub use solver::{
    Config, OrientationPolicy, ProgressCallback, ProgressInfo, Solver, DEFAULT_HEIGHT_LIMIT,
    ORIENTATION_ATTEMPTS,
};
