//! Example demonstrating the configuration system
//!
//! Run with: cargo run --example config_demo

use paper_diff::config::Config;
use paper_diff::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Paper Diff Configuration Demo ===\n");

    // Load or create default config
    let config = Config::load()?;
    let diff = &config.settings.diff;

    println!("Current settings:");
    println!("  Context lines: {}", diff.context_lines);
    println!("  Max LCS table cells: {}", diff.max_table_cells);
    println!("  Cache capacity: {}", diff.cache_capacity);
    println!("  Default view: {:?}", diff.default_view);

    println!("\nConfig file: {}", Config::config_path()?.display());

    let engine = diff.engine();
    let lines = engine.suggestion("alpha\nbeta\ngamma", "alpha\nBETA\ngamma");
    println!("\nSample suggestion diff:\n{}", render::render_unified(&lines));

    Ok(())
}
