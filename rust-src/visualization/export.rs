//! Static SVG/PNG export for the heatmap and box charts.

use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregation::{correlation_matrix, BoxStats, CorrelationMatrix};
use crate::models::{Dataset, NumericField};

use super::catalog::ChartId;
use super::heatmap::cell_text;
use super::theme::{Theme, VIRIDIS};


// Heatmap geometry
const HEAT_CELL: i32 = 72;
const HEAT_LEFT: i32 = 170;
const HEAT_TOP: i32 = 70;
const HEAT_BOTTOM: i32 = 150;

// Box chart geometry
const BOX_SLOT: i32 = 170;
const BOX_WIDTH: i32 = 90;
const PLOT_LEFT: i32 = 100;
const PLOT_TOP: i32 = 70;
const PLOT_HEIGHT: i32 = 380;
const BOX_BOTTOM: i32 = 60;
const TICKS: i32 = 5;


/// Charts that have a static renderer.
pub fn exportable_charts() -> Vec<ChartId> {
    ChartId::ALL
        .into_iter()
        .filter(|id| {
            matches!(
                id,
                ChartId::EducationBox
                    | ChartId::IndustryBox
                    | ChartId::LocationBox
                    | ChartId::CorrelationHeatmap
            )
        })
        .collect()
}


/// Render a chart to an SVG document.
pub fn render_chart_svg(chart: ChartId, dataset: &Dataset, theme: &Theme) -> Result<String> {
    if chart == ChartId::CorrelationHeatmap {
        let matrix = correlation_matrix(dataset, &NumericField::ALL);
        return Ok(heatmap_svg(&matrix, theme));
    }

    if let Some(spec) = chart.box_spec(theme) {
        let groups: Vec<(String, String, Option<BoxStats>)> = spec
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let values = dataset.values_for(NumericField::SalaryAt30, spec.family, label);
                let color = spec.colors[i % spec.colors.len()].clone();
                (label.clone(), color, BoxStats::from_values(&values))
            })
            .collect();
        return Ok(box_svg(&spec.title, &groups, theme));
    }

    let supported: Vec<String> = exportable_charts().iter().map(|c| c.to_string()).collect();
    anyhow::bail!(
        "Chart '{}' cannot be exported; supported charts: {}",
        chart,
        supported.join(", ")
    )
}


/// Export a chart as SVG.
pub fn export_chart_svg(chart: ChartId, dataset: &Dataset, theme: &Theme, output_path: &Path) -> Result<()> {
    let svg_content = render_chart_svg(chart, dataset, theme)?;

    std::fs::write(output_path, svg_content)
        .with_context(|| format!("Failed to write SVG to {}", output_path.display()))?;

    Ok(())
}


/// Export a chart as PNG.
pub fn export_chart_png(chart: ChartId, dataset: &Dataset, theme: &Theme, output_path: &Path) -> Result<()> {
    let svg_content = render_chart_svg(chart, dataset, theme)?;

    // Parse SVG
    let mut options = resvg::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = resvg::usvg::Tree::from_str(&svg_content, &options)
        .context("Failed to parse SVG")?;

    // Render to pixmap
    let size = tree.size();
    let width = size.width() as u32;
    let height = size.height() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .context("Failed to create pixmap")?;

    let bg = hex_to_rgb(theme.palette.paper_bg);
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.0, bg.1, bg.2, 255));

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.save_png(output_path)
        .with_context(|| format!("Failed to save PNG to {}", output_path.display()))?;

    Ok(())
}


/// Common SVG preamble: root element, styles, background and title.
fn svg_header(width: i32, height: i32, title: &str, theme: &Theme) -> Vec<String> {
    let palette = &theme.palette;
    vec![
        format!(r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#, width, height),
        "<style>".to_string(),
        format!("  .title {{ fill: {}; font: bold 18px {}; }}", palette.text, theme.font_family),
        format!("  .label {{ fill: {}; font: 12px {}; }}", palette.text, theme.font_family),
        format!("  .cell-text {{ fill: {}; font: 12px {}; }}", palette.text, theme.font_family),
        format!("  .grid {{ stroke: {}; stroke-width: 1; }}", palette.grid),
        "</style>".to_string(),
        format!(r#"<rect width="{}" height="{}" fill="{}"/>"#, width, height, palette.paper_bg),
        format!(r#"<text x="{}" y="35" class="title">{}</text>"#, 20, escape_xml(title)),
    ]
}


/// Generate SVG content for the correlation heatmap.
fn heatmap_svg(matrix: &CorrelationMatrix, theme: &Theme) -> String {
    let n = matrix.size() as i32;
    let width = HEAT_LEFT + n * HEAT_CELL + 40;
    let height = HEAT_TOP + n * HEAT_CELL + HEAT_BOTTOM;

    // Color range follows the data, like the interactive chart
    let defined: Vec<f64> = matrix.values.iter().flatten().flatten().copied().collect();
    let lo = defined.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = defined.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut svg_parts = svg_header(width, height, "Correlation Heatmap of Numeric Variables", theme);
    svg_parts.push(format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        HEAT_LEFT, HEAT_TOP, n * HEAT_CELL, n * HEAT_CELL, theme.palette.plot_bg
    ));

    for (row, field) in matrix.fields.iter().enumerate() {
        let y = HEAT_TOP + row as i32 * HEAT_CELL + HEAT_CELL / 2;
        svg_parts.push(format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="end">{}</text>"#,
            HEAT_LEFT - 8, y + 4, field
        ));

        let x = HEAT_LEFT + row as i32 * HEAT_CELL + HEAT_CELL / 2;
        let label_y = HEAT_TOP + n * HEAT_CELL + 12;
        svg_parts.push(format!(
            r#"<text x="{x}" y="{label_y}" class="label" transform="rotate(45 {x} {label_y})">{}</text>"#,
            field
        ));
    }

    for row in 0..matrix.size() {
        for col in 0..matrix.size() {
            let Some(v) = matrix.get(row, col) else { continue };

            let x = HEAT_LEFT + col as i32 * HEAT_CELL;
            let y = HEAT_TOP + row as i32 * HEAT_CELL;
            let t = if hi > lo { (v - lo) / (hi - lo) } else { 1.0 };

            svg_parts.push(format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"><title>{} / {}: {}</title></rect>"#,
                x, y, HEAT_CELL, HEAT_CELL, viridis(t),
                matrix.fields[row], matrix.fields[col], cell_text(Some(v))
            ));
            svg_parts.push(format!(
                r#"<text x="{}" y="{}" class="cell-text" text-anchor="middle">{}</text>"#,
                x + HEAT_CELL / 2, y + HEAT_CELL / 2 + 4, cell_text(Some(v))
            ));
        }
    }

    svg_parts.push("</svg>".to_string());
    svg_parts.join("\n")
}


/// Generate SVG content for a categorical box chart.
fn box_svg(title: &str, groups: &[(String, String, Option<BoxStats>)], theme: &Theme) -> String {
    let n = groups.len().max(1) as i32;
    let width = PLOT_LEFT + n * BOX_SLOT + 40;
    let height = PLOT_TOP + PLOT_HEIGHT + BOX_BOTTOM;

    let (lo, hi) = value_range(groups);
    let scale = |v: f64| -> f64 {
        let t = if hi > lo { (v - lo) / (hi - lo) } else { 0.5 };
        (PLOT_TOP + PLOT_HEIGHT) as f64 - t * PLOT_HEIGHT as f64
    };

    let mut svg_parts = svg_header(width, height, title, theme);
    svg_parts.push(format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        PLOT_LEFT, PLOT_TOP, n * BOX_SLOT, PLOT_HEIGHT, theme.palette.plot_bg
    ));

    // Gridlines and y ticks
    for i in 0..=TICKS {
        let v = lo + (hi - lo) * i as f64 / TICKS as f64;
        let y = scale(v);
        svg_parts.push(format!(
            r#"<line x1="{}" y1="{y:.1}" x2="{}" y2="{y:.1}" class="grid"/>"#,
            PLOT_LEFT, PLOT_LEFT + n * BOX_SLOT
        ));
        svg_parts.push(format!(
            r#"<text x="{}" y="{:.1}" class="label" text-anchor="end">{}</text>"#,
            PLOT_LEFT - 8, y + 4.0, format_salary(v)
        ));
    }
    svg_parts.push(format!(
        r#"<text x="20" y="{}" class="label" transform="rotate(-90 20 {})" text-anchor="middle">Salary at 30</text>"#,
        PLOT_TOP + PLOT_HEIGHT / 2, PLOT_TOP + PLOT_HEIGHT / 2
    ));

    for (i, (label, color, stats)) in groups.iter().enumerate() {
        let center = PLOT_LEFT + i as i32 * BOX_SLOT + BOX_SLOT / 2;
        let left = center - BOX_WIDTH / 2;

        svg_parts.push(format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center, PLOT_TOP + PLOT_HEIGHT + 20, escape_xml(label)
        ));

        let Some(stats) = stats else { continue };

        let (q1, q3) = (scale(stats.q1), scale(stats.q3));
        let whisker_half = (BOX_WIDTH as f64 * 0.8) / 2.0;

        // Whiskers
        for (from, to) in [(stats.q3, stats.upper_whisker), (stats.q1, stats.lower_whisker)] {
            svg_parts.push(format!(
                r#"<line x1="{center}" y1="{:.1}" x2="{center}" y2="{:.1}" stroke="white" stroke-width="2"/>"#,
                scale(from), scale(to)
            ));
            svg_parts.push(format!(
                r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="white" stroke-width="2"/>"#,
                center as f64 - whisker_half, center as f64 + whisker_half, y = scale(to)
            ));
        }

        // Box, median and mean
        svg_parts.push(format!(
            r#"<rect x="{}" y="{:.1}" width="{}" height="{:.1}" fill="{}" fill-opacity="0.8" stroke="white" stroke-width="2"><title>{}: median {}, mean {}, n={}</title></rect>"#,
            left, q3, BOX_WIDTH, (q1 - q3).max(1.0), color,
            escape_xml(label), format_salary(stats.median), format_salary(stats.mean), stats.count
        ));
        svg_parts.push(format!(
            r#"<line x1="{}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="white" stroke-width="2"/>"#,
            left, left + BOX_WIDTH, y = scale(stats.median)
        ));
        svg_parts.push(format!(
            r#"<line x1="{}" y1="{y:.1}" x2="{}" y2="{y:.1}" stroke="white" stroke-width="2" stroke-dasharray="6 4"/>"#,
            left, left + BOX_WIDTH, y = scale(stats.mean)
        ));

        for outlier in &stats.outliers {
            svg_parts.push(format!(
                r#"<circle cx="{}" cy="{:.1}" r="2.5" fill="{}" fill-opacity="0.7"/>"#,
                center, scale(*outlier), color
            ));
        }
    }

    svg_parts.push("</svg>".to_string());
    svg_parts.join("\n")
}


/// Overall min/max across all groups; a flat range is widened around its value.
fn value_range(groups: &[(String, String, Option<BoxStats>)]) -> (f64, f64) {
    let stats: Vec<&BoxStats> = groups.iter().filter_map(|g| g.2.as_ref()).collect();
    if stats.is_empty() {
        return (0.0, 1.0);
    }
    let lo = stats.iter().map(|s| s.min).fold(f64::INFINITY, f64::min);
    let hi = stats.iter().map(|s| s.max).fold(f64::NEG_INFINITY, f64::max);
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 1.0, hi + 1.0)
    }
}


/// Interpolate the Viridis scale at `t` in `[0, 1]`.
fn viridis(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let span = (VIRIDIS.len() - 1) as f64;
    let pos = t * span;
    let idx = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = pos - idx as f64;

    let a = hex_to_rgb(VIRIDIS[idx]);
    let b = hex_to_rgb(VIRIDIS[idx + 1]);
    let r = (a.0 as f64 + (b.0 as f64 - a.0 as f64) * frac).round() as u8;
    let g = (a.1 as f64 + (b.1 as f64 - a.1 as f64) * frac).round() as u8;
    let b = (a.2 as f64 + (b.2 as f64 - a.2 as f64) * frac).round() as u8;

    format!("rgb({},{},{})", r, g, b)
}


/// Convert hex color to RGB tuple.
fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}


/// Format a salary with a K suffix.
fn format_salary(value: f64) -> String {
    if value.abs() >= 1_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}


fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}


/// Open file with default application.
pub fn open_file(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn()
            .context("Failed to open file")?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open")
            .arg(path)
            .spawn()
            .context("Failed to open file")?;
    }

    Ok(())
}
