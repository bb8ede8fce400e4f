//! Export command for static chart images.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::default_export_path;
use crate::data::{load_dataset, LoadOptions};
use crate::visualization::{
    export_chart_png, export_chart_svg, exportable_charts, open_file, ChartId, Theme,
};


/// Run the export command.
pub fn run(
    chart: &str,
    data: &Path,
    strict: bool,
    svg: bool,
    should_open: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let chart: ChartId = chart.parse()?;
    if !exportable_charts().contains(&chart) {
        let supported: Vec<String> = exportable_charts().iter().map(|c| c.to_string()).collect();
        anyhow::bail!(
            "Chart '{}' cannot be exported; supported charts: {}",
            chart,
            supported.join(", ")
        );
    }

    // Determine format and output path
    let format_type = if svg { "svg" } else { "png" };
    let output_path = output.unwrap_or_else(|| default_export_path(chart.as_str(), svg));

    println!("Loading data from {}...", data.display());
    let dataset = load_dataset(data, LoadOptions { strict })?;
    let theme = Theme::dark();

    println!("Exporting {} to {}...", chart, format_type.to_uppercase());

    if svg {
        export_chart_svg(chart, &dataset, &theme, &output_path)?;
    } else {
        export_chart_png(chart, &dataset, &theme, &output_path)?;
    }

    println!("\x1b[32m+ Exported to: {}\x1b[0m", output_path.display());

    // Open if requested
    if should_open {
        println!("Opening {}...", format_type.to_uppercase());
        open_file(&output_path)?;
    }

    Ok(())
}
