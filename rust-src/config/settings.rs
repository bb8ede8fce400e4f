//! Application settings and path constants.

use std::path::PathBuf;


/// CSV file read at startup when no `--data` is given.
pub const DEFAULT_DATA_FILE: &str = "salary_at_30_years_of_age.csv";

/// Default listen address for the dashboard server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";

/// Environment overrides for the CLI flags.
pub const DATA_ENV_VAR: &str = "SALARY_DASH_DATA";
pub const BIND_ENV_VAR: &str = "SALARY_DASH_BIND";

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "salary-dash";

/// Page header text.
pub const PAGE_TITLE: &str = "Salary Analysis Dashboard";
pub const PAGE_SUBTITLE: &str = "Interactive analysis of salary factors at age 30";

/// Plotly.js bundle loaded by the page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";


/// Output path for an exported chart when `--output` is not given.
pub fn default_export_path(chart: &str, svg: bool) -> PathBuf {
    let extension = if svg { "svg" } else { "png" };
    PathBuf::from(format!("{chart}.{extension}"))
}
