//! Greedy volume-first packing.
//!
//! Pieces are sorted by volume (largest first, stable) and each one gets up to
//! [`ORIENTATION_ATTEMPTS`] tries. A try picks an orientation, then walks the
//! free regions in order and commits at the origin of the first region that
//! both passes the fit test and is accepted by the container. There is no
//! backtracking: a committed piece is never moved.

use crate::boundary::Block;
use crate::container::Container;
use crate::geometry::{Orientation, Piece};
use blockcut_core::geometry::{Boundary, Geometry};
use blockcut_core::solver::{
    Config, OrientationPolicy, ProgressCallback, ProgressInfo, Solver, ORIENTATION_ATTEMPTS,
};
use blockcut_core::{Error, PackingReport, Result, UnplacedPiece};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Picks the orientation for each try.
enum OrientationSource {
    Exhaustive,
    Random(StdRng),
}

impl OrientationSource {
    /// Builds the source for `policy`, returning the seed in use, if any.
    fn new(policy: OrientationPolicy) -> (Self, Option<u64>) {
        match policy {
            OrientationPolicy::Exhaustive => (Self::Exhaustive, None),
            OrientationPolicy::Random { seed } => {
                let seed = seed.unwrap_or_else(rand::random);
                (Self::Random(StdRng::seed_from_u64(seed)), Some(seed))
            }
        }
    }

    fn pick(&mut self, attempt: usize) -> Orientation {
        match self {
            Self::Exhaustive => Orientation::from_index(attempt),
            Self::Random(rng) => {
                Orientation::from_index(rng.gen_range(0..Orientation::ALL.len()))
            }
        }
    }
}

/// Outcome of a finished run: the filled container and what did not fit.
#[derive(Debug, Clone)]
pub struct Packing {
    container: Container,
    unplaced: Vec<Piece>,
    strategy: &'static str,
    seed: Option<u64>,
    elapsed_ms: u64,
    cancelled: bool,
}

impl Packing {
    /// Returns the filled container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Returns the pieces that could not be placed, as given.
    pub fn unplaced(&self) -> &[Piece] {
        &self.unplaced
    }

    /// Returns the seed used for random orientations, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Builds the report for this run.
    pub fn report(&self) -> PackingReport {
        let mut report = PackingReport::new().with_strategy(self.strategy);
        report.placements = self
            .container
            .placed()
            .iter()
            .map(|p| p.to_placement())
            .collect();
        report.unplaced = self
            .unplaced
            .iter()
            .map(|p| {
                let d = p.original_dimensions();
                UnplacedPiece::new(p.id().clone(), [d.x, d.y, d.z])
            })
            .collect();
        report.utilization = self.container.utilization();
        report.occupied_volume = self.container.occupied_volume();
        report.total_volume = self.container.total_volume();
        report.height_limit = self.container.block().height_limit();
        report.seed = self.seed;
        report.computation_time_ms = self.elapsed_ms;
        report.cancelled = self.cancelled;
        report
    }
}

/// Greedy 3D cutting optimizer.
pub struct Optimizer {
    config: Config,
    cancelled: Arc<AtomicBool>,
}

impl Optimizer {
    /// Creates a new optimizer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Creates an optimizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the greedy placement and returns the filled container.
    pub fn pack(&self, pieces: &[Piece], block: &Block) -> Result<Packing> {
        self.cancelled.store(false, Ordering::Relaxed);
        self.run(pieces, block, self.config.orientation, None)
    }

    /// Runs one random-orientation pass per seed in parallel and keeps the
    /// best report (highest utilization, earliest seed on ties).
    pub fn solve_seeds(
        &self,
        pieces: &[Piece],
        block: &Block,
        seeds: &[u64],
    ) -> Result<PackingReport> {
        if seeds.is_empty() {
            return Err(Error::ConfigError("at least one seed is required".into()));
        }
        self.cancelled.store(false, Ordering::Relaxed);

        let reports = seeds
            .par_iter()
            .map(|&seed| {
                self.run(
                    pieces,
                    block,
                    OrientationPolicy::Random { seed: Some(seed) },
                    None,
                )
                .map(|packing| packing.report())
            })
            .collect::<Result<Vec<_>>>()?;

        let mut best: Option<PackingReport> = None;
        for report in reports {
            match &best {
                Some(current) if !report.is_better_than(current) => {}
                _ => best = Some(report),
            }
        }

        let best = best.ok_or_else(|| Error::Internal("no run produced a report".into()))?;
        log::info!(
            "best of {} seeds: seed {:?}, {} placed, {:.1}%",
            seeds.len(),
            best.seed,
            best.placed_count(),
            best.utilization
        );
        Ok(best)
    }

    fn should_stop(&self, start: &Instant) -> bool {
        if self.cancelled.load(Ordering::Relaxed) {
            return true;
        }
        self.config.time_limit_ms > 0
            && start.elapsed().as_millis() as u64 >= self.config.time_limit_ms
    }

    fn run(
        &self,
        pieces: &[Piece],
        block: &Block,
        policy: OrientationPolicy,
        progress: Option<&ProgressCallback>,
    ) -> Result<Packing> {
        block.validate()?;
        for piece in pieces {
            piece.validate()?;
        }

        let start = Instant::now();
        let (mut source, seed) = OrientationSource::new(policy);

        // Stable: equal volumes keep their input order.
        let mut order: Vec<&Piece> = pieces.iter().collect();
        order.sort_by(|a, b| {
            b.volume()
                .partial_cmp(&a.volume())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut container = Container::new(block);
        let mut unplaced = Vec::new();
        let mut cancelled = false;

        for (processed, piece) in order.into_iter().enumerate() {
            if !cancelled && self.should_stop(&start) {
                cancelled = true;
                log::warn!(
                    "run stopped after {} of {} pieces; the rest are left unplaced",
                    processed,
                    pieces.len()
                );
            }

            if cancelled {
                unplaced.push(piece.clone());
            } else if place_piece(&mut container, piece, &mut source) {
                log::debug!(
                    "placed '{}' ({} free regions)",
                    piece.id(),
                    container.free_space().len()
                );
            } else {
                log::debug!("no room for '{}'", piece.id());
                unplaced.push(piece.clone());
            }

            if let Some(callback) = progress {
                callback(ProgressInfo {
                    processed: processed + 1,
                    total: pieces.len(),
                    placed: container.placed_count(),
                    utilization: container.utilization(),
                    elapsed_ms: start.elapsed().as_millis() as u64,
                    running: processed + 1 < pieces.len(),
                });
            }
        }

        log::info!(
            "{} placed, {} unplaced, utilization {:.1}%",
            container.placed_count(),
            unplaced.len(),
            container.utilization()
        );

        Ok(Packing {
            container,
            unplaced,
            strategy: policy.name(),
            seed,
            elapsed_ms: start.elapsed().as_millis() as u64,
            cancelled,
        })
    }
}

/// Makes up to [`ORIENTATION_ATTEMPTS`] tries for `piece`.
fn place_piece(container: &mut Container, piece: &Piece, source: &mut OrientationSource) -> bool {
    for attempt in 0..ORIENTATION_ATTEMPTS {
        let candidate = piece.reoriented(source.pick(attempt));
        for origin in container.free_space().candidates(candidate.dimensions()) {
            if container.place(&candidate, origin) {
                return true;
            }
        }
    }
    false
}

impl Solver for Optimizer {
    type Geometry = Piece;
    type Boundary = Block;

    fn solve(
        &self,
        geometries: &[Self::Geometry],
        boundary: &Self::Boundary,
    ) -> Result<PackingReport> {
        self.pack(geometries, boundary).map(|packing| packing.report())
    }

    fn solve_with_progress(
        &self,
        geometries: &[Self::Geometry],
        boundary: &Self::Boundary,
        callback: ProgressCallback,
    ) -> Result<PackingReport> {
        self.cancelled.store(false, Ordering::Relaxed);
        self.run(geometries, boundary, self.config.orientation, Some(&callback))
            .map(|packing| packing.report())
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
