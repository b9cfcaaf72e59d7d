//! Job file parsing.

use blockcut_core::DEFAULT_HEIGHT_LIMIT;
use blockcut_d3::{Block, Piece};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid job: {0}")]
    InvalidJob(#[from] blockcut_core::Error),
}

/// Block section of a job file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default = "default_height_limit")]
    pub height_limit: f64,
}

fn default_height_limit() -> f64 {
    DEFAULT_HEIGHT_LIMIT
}

fn default_quantity() -> usize {
    1
}

/// One piece entry; `quantity` copies are expanded on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceSpec {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

/// A packing job: one block and the pieces to cut from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub block: BlockSpec,
    pub pieces: Vec<PieceSpec>,
}

impl Job {
    /// Loads a job from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JobError> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parses a job from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, JobError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overrides the block's height limit.
    pub fn with_height_limit(mut self, limit: f64) -> Self {
        self.block.height_limit = limit;
        self
    }

    /// Builds the block.
    pub fn block(&self) -> Block {
        Block::new(self.block.width, self.block.height, self.block.depth)
            .with_height_limit(self.block.height_limit)
    }

    /// Builds the pieces, expanding quantities.
    ///
    /// The first copy keeps the entry's name, later copies get `#2`, `#3`, ...
    pub fn pieces(&self) -> Result<Vec<Piece>, JobError> {
        let mut pieces = Vec::new();
        for spec in &self.pieces {
            for copy in 0..spec.quantity {
                let id = if copy == 0 {
                    spec.name.clone()
                } else {
                    format!("{}#{}", spec.name, copy + 1)
                };
                pieces.push(Piece::new(id, spec.width, spec.height, spec.depth)?);
            }
        }
        Ok(pieces)
    }
}

/// The sample foam block job: a 200 x 118 x 180 block and 13 pieces.
pub fn demo_job() -> Job {
    let entry = |name: &str, width: f64, height: f64, depth: f64| PieceSpec {
        name: name.to_string(),
        width,
        height,
        depth,
        quantity: 1,
    };

    Job {
        block: BlockSpec {
            width: 200.0,
            height: 118.0,
            depth: 180.0,
            height_limit: DEFAULT_HEIGHT_LIMIT,
        },
        pieces: vec![
            entry("Pieza_A", 20.0, 15.0, 10.0),
            entry("Pieza_B", 25.0, 20.0, 15.0),
            entry("Pieza_C", 30.0, 25.0, 20.0),
            entry("Pieza_D", 35.0, 30.0, 25.0),
            entry("Pieza_E", 40.0, 35.0, 30.0),
            entry("Pieza_F", 45.0, 40.0, 35.0),
            entry("Pieza_G", 50.0, 45.0, 40.0),
            entry("Pieza_H", 15.0, 12.0, 8.0),
            entry("Pieza_I", 18.0, 14.0, 9.0),
            entry("Pieza_J", 22.0, 16.0, 11.0),
            entry("Pieza_A2", 20.0, 15.0, 10.0),
            entry("Pieza_B2", 25.0, 20.0, 15.0),
            entry("Pieza_C2", 30.0, 25.0, 20.0),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcut_core::geometry::Geometry;

    #[test]
    fn test_parse_job() {
        let job = Job::parse_json(
            r#"{
                "block": { "width": 10, "height": 10, "depth": 200 },
                "pieces": [
                    { "name": "A", "width": 4, "height": 4, "depth": 4, "quantity": 3 },
                    { "name": "T", "width": 4, "height": 4, "depth": 160 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(job.block.height_limit, 150.0);
        assert_eq!(job.pieces[1].quantity, 1);

        let pieces = job.pieces().unwrap();
        let ids: Vec<_> = pieces.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["A", "A#2", "A#3", "T"]);

        let block = job.block();
        assert_eq!(block.depth(), 200.0);
        assert_eq!(block.height_limit(), 150.0);
    }

    #[test]
    fn test_height_limit_override() {
        let job = demo_job().with_height_limit(90.0);
        assert_eq!(job.block().height_limit(), 90.0);
    }

    #[test]
    fn test_invalid_piece() {
        let job = Job::parse_json(
            r#"{
                "block": { "width": 10, "height": 10, "depth": 10 },
                "pieces": [ { "name": "bad", "width": 0, "height": 4, "depth": 4 } ]
            }"#,
        )
        .unwrap();
        assert!(matches!(job.pieces(), Err(JobError::InvalidJob(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Job::parse_json("{ \"block\": 3 }"),
            Err(JobError::JsonError(_))
        ));
    }

    #[test]
    fn test_demo_job() {
        let job = demo_job();
        assert_eq!(job.pieces().unwrap().len(), 13);
        assert_eq!(job.block().width(), 200.0);
    }
}
