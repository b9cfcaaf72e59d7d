//! Plain-text report summary.

use blockcut_core::{PackingReport, ReportSummary};
use std::fmt::Write;

/// Renders a short summary of `report`.
pub fn render_summary(report: &PackingReport) -> String {
    let summary = ReportSummary::from(report);
    let stats = report.placement_stats();
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Results");
    let _ = writeln!(out, "{:-<40}", "");
    let _ = writeln!(out, "  Placed:          {}", summary.total_placed);
    let _ = writeln!(out, "  Unplaced:        {}", summary.total_unplaced);
    let _ = writeln!(out, "  Utilization:     {:.1}%", summary.utilization_percent);
    let _ = writeln!(out, "  Occupied volume: {:.0}", summary.occupied_volume);
    let _ = writeln!(out, "  Total volume:    {:.0}", summary.total_volume);
    let _ = writeln!(
        out,
        "  Top of stack:    {} (limit {})",
        stats.max_z, report.height_limit
    );
    let _ = writeln!(
        out,
        "  Rotated pieces:  {} of {}",
        stats.count - stats.unrotated_count,
        stats.count
    );
    let _ = writeln!(out, "  Strategy:        {}", summary.strategy);
    if let Some(seed) = report.seed {
        let _ = writeln!(out, "  Seed:            {}", seed);
    }
    let _ = writeln!(out, "  Time:            {}ms", summary.time_ms);
    if !report.completed_normally() {
        let _ = writeln!(out, "  (stopped early)");
    }

    if !report.placements.is_empty() {
        let _ = writeln!(out, "\nPlaced pieces:");
        for p in &report.placements {
            let _ = writeln!(
                out,
                "  - {}: {} x {} x {} at ({}, {}, {})",
                p.piece_id,
                p.dimensions[0],
                p.dimensions[1],
                p.dimensions[2],
                p.x(),
                p.y(),
                p.z()
            );
        }
    }

    if !report.unplaced.is_empty() {
        let _ = writeln!(out, "\nUnplaced pieces:");
        for u in &report.unplaced {
            let _ = writeln!(
                out,
                "  - {}: {} x {} x {}",
                u.piece_id, u.dimensions[0], u.dimensions[1], u.dimensions[2]
            );
        }
    }

    out
}

/// Prints a short summary of `report` to stdout.
pub fn print_summary(report: &PackingReport) {
    print!("{}", render_summary(report));
}
