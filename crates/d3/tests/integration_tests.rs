//! Integration tests for blockcut-d3.

use approx::assert_relative_eq;
use blockcut_core::geometry::Geometry;
use blockcut_d3::{
    Block, Config, Container, Optimizer, Orientation, Packing, Piece, Region, Solver,
};
use nalgebra::Vector3;
use rand::prelude::*;

fn random_pieces(rng: &mut StdRng, count: usize, max_extent: f64) -> Vec<Piece> {
    (0..count)
        .map(|i| {
            Piece::new(
                format!("P{}", i),
                rng.gen_range(1.0..max_extent),
                rng.gen_range(1.0..max_extent),
                rng.gen_range(1.0..max_extent),
            )
            .unwrap()
        })
        .collect()
}

fn random_runs() -> Vec<Packing> {
    let mut rng = StdRng::seed_from_u64(2025);
    let mut runs = Vec::new();
    for round in 0..8 {
        let pieces = random_pieces(&mut rng, 30, 60.0);
        let block = Block::new(200.0, 118.0, 180.0);
        let config = if round % 2 == 0 {
            Config::default()
        } else {
            Config::default().with_seed(round)
        };
        runs.push(Optimizer::new(config).pack(&pieces, &block).unwrap());
    }
    runs
}

mod property_tests {
    use super::*;

    #[test]
    fn test_no_two_footprints_overlap() {
        for packing in random_runs() {
            let placed = packing.container().placed();
            for (i, a) in placed.iter().enumerate() {
                for b in &placed[i + 1..] {
                    assert!(
                        !a.footprint().overlaps(&b.footprint()),
                        "'{}' overlaps '{}'",
                        a.piece().id(),
                        b.piece().id()
                    );
                }
            }
        }
    }

    #[test]
    fn test_footprints_within_bounds_and_height_limit() {
        for packing in random_runs() {
            let container = packing.container();
            let whole = Region::new(Vector3::zeros(), *container.block().dimensions());
            for p in container.placed() {
                let footprint = p.footprint();
                assert!(whole.contains(&footprint), "'{}' leaves the block", p.piece().id());
                assert!(footprint.max_corner().z <= 150.0);
            }
        }
    }

    #[test]
    fn test_occupied_volume_matches_placed_sum() {
        for packing in random_runs() {
            let container = packing.container();
            let sum: f64 = container.placed().iter().map(|p| p.piece().volume()).sum();
            assert_relative_eq!(container.occupied_volume(), sum, epsilon = 1e-6);

            let report = packing.report();
            assert_relative_eq!(report.occupied_volume, sum, epsilon = 1e-6);
            assert_eq!(report.placed_count() + report.unplaced_count(), 30);
        }
    }

    #[test]
    fn test_utilization_in_range() {
        for packing in random_runs() {
            let u = packing.container().utilization();
            assert!((0.0..=100.0).contains(&u), "utilization {}", u);
        }
        let empty = Container::new(&Block::new(10.0, 10.0, 10.0));
        assert_eq!(empty.utilization(), 0.0);
    }

    #[test]
    fn test_reorient_preserves_volume() {
        let mut rng = StdRng::seed_from_u64(7);
        for piece in random_pieces(&mut rng, 20, 50.0) {
            for o in Orientation::ALL {
                assert_relative_eq!(piece.reoriented(o).measure(), piece.measure());
            }
        }
    }

    #[test]
    fn test_rejected_place_does_not_mutate() {
        let mut rng = StdRng::seed_from_u64(99);
        let block = Block::new(50.0, 50.0, 50.0);
        let mut container = Container::new(&block);
        let pieces = random_pieces(&mut rng, 40, 25.0);

        for piece in &pieces {
            let position = Vector3::new(
                rng.gen_range(-5.0..50.0),
                rng.gen_range(-5.0..50.0),
                rng.gen_range(-5.0..50.0),
            );
            let allowed = container.can_place(piece, &position);

            let placed_before = container.placed().len();
            let volume_before = container.occupied_volume();
            let free_before = container.free_space().clone();

            let committed = container.place(piece, position);
            assert_eq!(allowed, committed);

            if !committed {
                assert_eq!(container.placed().len(), placed_before);
                assert_eq!(container.occupied_volume(), volume_before);
                assert_eq!(container.free_space(), &free_before);
            }
        }
    }

    #[test]
    fn test_placements_keep_original_extents() {
        for packing in random_runs() {
            for p in packing.container().placed() {
                let mut effective: Vec<f64> = p.piece().extents();
                let o = p.piece().original_dimensions();
                let mut original = vec![o.x, o.y, o.z];
                effective.sort_by(|a, b| a.partial_cmp(b).unwrap());
                original.sort_by(|a, b| a.partial_cmp(b).unwrap());
                assert_eq!(effective, original);
            }
        }
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_single_cube() {
        let report = Optimizer::default_config()
            .solve(
                &[Piece::new("A", 4.0, 4.0, 4.0).unwrap()],
                &Block::new(10.0, 10.0, 10.0),
            )
            .unwrap();

        assert_eq!(report.placed_count(), 1);
        assert_eq!(report.placements[0].position, [0.0, 0.0, 0.0]);
        assert_relative_eq!(report.utilization, 6.4, epsilon = 1e-9);
        assert_relative_eq!(report.occupied_volume, 64.0);
        assert_relative_eq!(report.total_volume, 1000.0);
    }

    #[test]
    fn test_piece_taller_than_height_limit() {
        let block = Block::new(10.0, 10.0, 200.0);
        let piece = Piece::new("T", 4.0, 4.0, 160.0).unwrap();

        let report = Optimizer::default_config()
            .solve(std::slice::from_ref(&piece), &block)
            .unwrap();
        assert_eq!(report.placed_count(), 0);
        assert_eq!(report.unplaced_count(), 1);

        // No orientation is placeable anywhere the free space offers.
        let container = Container::new(&block);
        for o in Orientation::ALL {
            let rotated = piece.reoriented(o);
            for origin in container.free_space().candidates(rotated.dimensions()) {
                assert!(!container.can_place(&rotated, &origin));
            }
        }

        // Random orientation sampling cannot do better.
        let report = Optimizer::new(Config::default().with_seed(3))
            .solve(&[piece], &block)
            .unwrap();
        assert_eq!(report.unplaced_count(), 1);
    }

    #[test]
    fn test_two_large_cubes() {
        let pieces = vec![
            Piece::new("A", 6.0, 6.0, 6.0).unwrap(),
            Piece::new("B", 6.0, 6.0, 6.0).unwrap(),
        ];
        let packing = Optimizer::default_config()
            .pack(&pieces, &Block::new(10.0, 10.0, 10.0))
            .unwrap();

        // Every residual slab is thinner than 6 on some axis.
        assert!(packing
            .container()
            .free_space()
            .iter()
            .all(|r| !r.fits(&Vector3::new(6.0, 6.0, 6.0))));

        let report = packing.report();
        assert_eq!(report.placed_count(), 1);
        assert_eq!(report.unplaced_count(), 1);
        assert_eq!(report.placements[0].piece_id, "A");
        assert_eq!(report.unplaced[0].piece_id, "B");
        assert_relative_eq!(report.utilization, 21.6, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_volume_block() {
        let block = Block::new(0.0, 0.0, 0.0);
        let mut container = Container::new(&block);
        let piece = Piece::new("A", 1.0, 1.0, 1.0).unwrap();

        for position in [
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(-1.0, 0.0, 0.0),
        ] {
            assert!(!container.can_place(&piece, &position));
            assert!(!container.place(&piece, position));
        }
        assert_eq!(container.utilization(), 0.0);

        // The optimizer refuses to run on it.
        assert!(Optimizer::default_config().solve(&[piece], &block).is_err());
    }

    #[test]
    fn test_foam_block_demo_job() {
        let dims = [
            ("Pieza_A", 20.0, 15.0, 10.0),
            ("Pieza_B", 25.0, 20.0, 15.0),
            ("Pieza_C", 30.0, 25.0, 20.0),
            ("Pieza_D", 35.0, 30.0, 25.0),
            ("Pieza_E", 40.0, 35.0, 30.0),
            ("Pieza_F", 45.0, 40.0, 35.0),
            ("Pieza_G", 50.0, 45.0, 40.0),
            ("Pieza_H", 15.0, 12.0, 8.0),
            ("Pieza_I", 18.0, 14.0, 9.0),
            ("Pieza_J", 22.0, 16.0, 11.0),
            ("Pieza_A2", 20.0, 15.0, 10.0),
            ("Pieza_B2", 25.0, 20.0, 15.0),
            ("Pieza_C2", 30.0, 25.0, 20.0),
        ];
        let pieces: Vec<_> = dims
            .iter()
            .map(|&(id, w, h, d)| Piece::new(id, w, h, d).unwrap())
            .collect();
        let total: f64 = pieces.iter().map(Piece::volume).sum();

        let report = Optimizer::default_config()
            .solve(&pieces, &Block::new(200.0, 118.0, 180.0))
            .unwrap();

        // Everything fits comfortably in a 200 x 118 x 180 block.
        assert!(report.all_placed());
        assert_relative_eq!(report.occupied_volume, total, epsilon = 1e-6);
        assert_eq!(report.placements[0].piece_id, "Pieza_G");
        assert_eq!(report.placements[0].position, [0.0, 0.0, 0.0]);
    }
}
