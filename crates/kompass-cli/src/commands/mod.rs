pub mod pages;
pub mod score;
pub mod take;

use colored::Colorize;

use kompass_core::{Dimension, ScoreReport};

/// Print a score report: tallies, typology, stability, destination page.
pub fn print_report(report: &ScoreReport) {
    println!("  {}", "Result".bold());
    for dimension in Dimension::all() {
        let tally = report.tallies.tally(*dimension);
        println!(
            "  {dimension}: {} A / {} B -> {}",
            tally.a,
            tally.b,
            report.tallies.resolve(*dimension)
        );
    }
    println!("  Adaptive points: {}/3", report.adaptive_points);
    println!(
        "  Type: {} ({})",
        report.typology.to_string().bold(),
        report.stability
    );
    println!("  Page: {}", report.destination().name());
}
