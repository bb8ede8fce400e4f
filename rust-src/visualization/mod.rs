//! Visualization layer: chart producers, theme, page and exports.

mod box_plot;
mod catalog;
mod dashboard;
mod export;
mod figure;
mod heatmap;
mod page;
mod parallel;
mod scatter;
mod theme;

pub use catalog::ChartId;
pub use dashboard::render_summary;
pub use export::{export_chart_png, export_chart_svg, exportable_charts, open_file};
pub use page::{build_layout, render_page, PageLayout};
pub use theme::Theme;
