//! # blockcut
//!
//! Greedy cutting of rectangular pieces from a 3D block.
//!
//! ## Quick Start
//!
//! ```rust
//! use blockcut::d3::{Block, Optimizer, Piece};
//! use blockcut::{Config, Solver};
//!
//! let block = Block::new(10.0, 10.0, 10.0);
//! let pieces = vec![
//!     Piece::new("A", 6.0, 6.0, 6.0)?,
//!     Piece::new("B", 6.0, 6.0, 6.0)?,
//! ];
//!
//! let report = Optimizer::new(Config::default()).solve(&pieces, &block)?;
//! assert_eq!(report.placed_count(), 1);
//! assert_eq!(report.unplaced_count(), 1);
//! # Ok::<(), blockcut::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core traits and abstractions.
pub use blockcut_core as core;

/// 3D cutting optimizer.
pub use blockcut_d3 as d3;

// Re-export commonly used types at root level
pub use blockcut_core::{Config, Error, PackingReport, Placement, Result, Solver};
