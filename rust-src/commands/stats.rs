//! Stats command - print salary figures and per-category breakdowns.

use std::path::Path;

use anyhow::Result;

use crate::aggregation::summarize;
use crate::data::{load_dataset, LoadOptions};
use crate::visualization::render_summary;


/// Run the stats command.
pub fn run(data: &Path, strict: bool) -> Result<()> {
    let dataset = load_dataset(data, LoadOptions { strict })?;
    let summary = summarize(&dataset);

    if summary.salaries == 0 {
        println!("No salary values found in {}.", data.display());
        return Ok(());
    }

    println!("\n{}", "=".repeat(60));
    println!("{:^60}", "Salary at 30 - Summary");
    println!("{}\n", "=".repeat(60));

    render_summary(&summary);

    Ok(())
}
