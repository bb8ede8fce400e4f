//! Static page description and its HTML rendering.

use serde::Serialize;

use crate::config::{PAGE_SUBTITLE, PAGE_TITLE, PLOTLY_CDN};

use super::catalog::ChartId;
use super::theme::Theme;


/// Header plus rows of chart placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLayout {
    pub title: String,
    pub subtitle: String,
    pub rows: Vec<Vec<ChartId>>,
}


/// The fixed dashboard layout: 3 box charts, 3 scatters, then 3D and heatmap.
pub fn build_layout() -> PageLayout {
    PageLayout {
        title: PAGE_TITLE.to_string(),
        subtitle: PAGE_SUBTITLE.to_string(),
        rows: vec![
            vec![ChartId::EducationBox, ChartId::IndustryBox, ChartId::LocationBox],
            vec![
                ChartId::ExperienceScatter,
                ChartId::GpaScatter,
                ChartId::CertificationsScatter,
            ],
            vec![ChartId::Scatter3d, ChartId::CorrelationHeatmap],
        ],
    }
}


/// Render the dashboard document. Charts are fetched from `/api/charts/{id}`.
pub fn render_page(layout: &PageLayout, theme: &Theme) -> String {
    let palette = &theme.palette;
    let font = theme.font_family;

    let mut html_parts = vec![
        "<!DOCTYPE html>".to_string(),
        "<html lang=\"en\">".to_string(),
        "<head>".to_string(),
        "<meta charset=\"utf-8\">".to_string(),
        format!("<title>{}</title>", escape(&layout.title)),
        format!("<script src=\"{}\"></script>", PLOTLY_CDN),
        "<style>".to_string(),
        format!(
            "  body {{ margin: 0; background: {}; color: {}; font-family: {}; min-height: 100vh; padding: 20px; }}",
            palette.background, palette.text, font
        ),
        "  h1 { text-align: center; padding: 20px; font-size: 2.5em; font-weight: bold; margin-bottom: 20px; }".to_string(),
        "  .subtitle { text-align: center; margin-bottom: 40px; }".to_string(),
        "  .row { display: flex; flex-direction: row; padding: 20px; gap: 20px; }".to_string(),
        "  .card { flex: 1; min-width: 0; position: relative; }".to_string(),
        "  .chart { min-height: 450px; }".to_string(),
        format!(
            "  .refresh {{ position: absolute; top: 8px; right: 8px; z-index: 10; background: {}; color: {}; border: none; border-radius: 4px; padding: 4px 10px; cursor: pointer; }}",
            palette.accent, palette.text
        ),
        format!("  .refresh:hover {{ background: {}; }}", palette.success),
        format!("  .loading {{ color: {}; padding: 20px; }}", palette.warning),
        format!("  .error {{ color: {}; padding: 20px; }}", palette.danger),
        "</style>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        "<header>".to_string(),
        format!("<h1>{}</h1>", escape(&layout.title)),
        format!("<p class=\"subtitle\">{}</p>", escape(&layout.subtitle)),
        "</header>".to_string(),
    ];

    for row in &layout.rows {
        html_parts.push("<div class=\"row\">".to_string());
        for chart in row {
            html_parts.push(format!(
                r#"  <div class="card"><button class="refresh" data-chart="{id}">Refresh</button><div class="chart" id="{id}"><div class="loading">Loading...</div></div></div>"#,
                id = chart
            ));
        }
        html_parts.push("</div>".to_string());
    }

    html_parts.push("<script>".to_string());
    html_parts.push(CLIENT_SCRIPT.to_string());
    html_parts.push("</script>".to_string());
    html_parts.push("</body>".to_string());
    html_parts.push("</html>".to_string());

    html_parts.join("\n")
}


/// Loads every placeholder once; a refresh button reloads only its own chart.
const CLIENT_SCRIPT: &str = r#"
async function loadChart(id) {
  const el = document.getElementById(id);
  try {
    const res = await fetch('/api/charts/' + encodeURIComponent(id));
    if (!res.ok) throw new Error('HTTP ' + res.status);
    const fig = await res.json();
    el.querySelectorAll('.loading, .error').forEach(node => node.remove());
    await Plotly.react(el, fig.data, fig.layout, { responsive: true });
  } catch (err) {
    Plotly.purge(el);
    el.innerHTML = '<div class="error">Failed to load ' + id + ': ' + err.message + '</div>';
  }
}
document.querySelectorAll('.chart').forEach(el => loadChart(el.id));
document.querySelectorAll('.refresh').forEach(btn =>
  btn.addEventListener('click', () => loadChart(btn.dataset.chart)));
"#;


/// Minimal HTML text escaping.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
