use data_loader::{load_from_path, LoaderOptions};
use std::path::PathBuf;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/tmdb_5000_credits.csv"));

    println!("Loading credits from {}...\n", path.display());

    let start = Instant::now();
    let report = load_from_path(&path, &LoaderOptions::default())
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let catalog = &report.catalog;
    let credits: usize = catalog
        .works()
        .iter()
        .map(|w| w.cast.len() + w.crew.len())
        .sum();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Works: {}", catalog.len());
    println!("Skipped rows: {}", report.skipped.len());
    println!("People: {}", catalog.people().len());
    println!("Departments: {}", catalog.departments().len());
    println!("\nPerformance: {:.0} credits/second",
             credits as f64 / elapsed.as_secs_f64());
}
