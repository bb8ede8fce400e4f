//! Salary summary rendering using terminal output.

use crate::aggregation::{CategoryBreakdown, SalarySummary};


// Constants
const BLUE: &str = "\x1b[38;5;75m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const BAR_WIDTH: usize = 20;


/// Format a salary with thousands separators, e.g. `$85,250`.
pub fn format_salary(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}


fn format_optional(value: Option<f64>) -> String {
    value.map(format_salary).unwrap_or_else(|| "-".to_string())
}


/// Create a simple text bar for visualization.
fn create_bar(value: f64, max_value: f64, width: usize, color: &str) -> String {
    if max_value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64) as usize;
    let filled = filled.min(width);

    format!(
        "{}{}{}{}{}",
        color,
        "█".repeat(filled),
        RESET,
        DIM,
        "░".repeat(width - filled),
    ) + RESET
}


/// Render the complete summary.
pub fn render_summary(summary: &SalarySummary) {
    render_kpi_section(summary);
    println!();

    for breakdown in &summary.breakdowns {
        render_breakdown(breakdown);
        println!();
    }

    println!(
        "{}Tip: View the interactive charts with {}{}salary-dash serve{}",
        DIM, RESET, CYAN, RESET
    );
}


/// Render the KPI cards section.
fn render_kpi_section(summary: &SalarySummary) {
    let width = 22;
    let border = "─".repeat(width - 2);

    println!(
        "┌{b}┐  ┌{b}┐  ┌{b}┐  ┌{b}┐",
        b = border
    );
    println!(
        "│{:^20}│  │{:^20}│  │{:^20}│  │{:^20}│",
        "Professionals", "Avg Salary", "Highest", "Lowest"
    );
    println!(
        "│{}{}{:^20}{}│  │{}{:^20}{}│  │{}{:^20}{}│  │{}{:^20}{}│",
        BOLD, BLUE,
        summary.records,
        RESET,
        BOLD,
        format_optional(summary.mean),
        RESET,
        BOLD,
        format_optional(summary.max),
        RESET,
        BOLD,
        format_optional(summary.min),
        RESET,
    );
    println!(
        "└{b}┘  └{b}┘  └{b}┘  └{b}┘",
        b = border
    );
}


/// Render mean salary per label as bars, in declared label order.
fn render_breakdown(breakdown: &CategoryBreakdown) {
    let max_mean = breakdown
        .groups
        .iter()
        .filter_map(|g| g.mean)
        .fold(0.0_f64, f64::max);

    println!("┌────────────────────────────────────────────────────────────────────────────┐");
    println!(
        "│ {}{:<74}{} │",
        BOLD,
        format!("Mean Salary by {}", breakdown.family.title()),
        RESET
    );
    println!("├────────────────────────────────────────────────────────────────────────────┤");

    for group in &breakdown.groups {
        let bar = create_bar(group.mean.unwrap_or(0.0), max_mean, BAR_WIDTH, BLUE);
        println!(
            "│ {:16} {} {}{:>10}{} {}{:>8}{} median {:>10} │",
            group.label,
            bar,
            BLUE,
            format_optional(group.mean),
            RESET,
            CYAN,
            format!("n={}", group.count),
            RESET,
            format_optional(group.median),
        );
    }

    println!("└────────────────────────────────────────────────────────────────────────────┘");
}
