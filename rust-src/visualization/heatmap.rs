//! Correlation heatmap over the numeric columns.

use crate::aggregation::{correlation_matrix, CorrelationMatrix};
use crate::models::{Dataset, NumericField};

use super::figure::{Axis, Figure, Font, HeatmapTrace, Layout};
use super::theme::Theme;


/// Cell label: two decimals, blank when the correlation is undefined.
pub fn cell_text(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}


/// Heatmap of pairwise Pearson correlations, rows and columns in `fields` order.
pub fn correlation_heatmap(dataset: &Dataset, fields: &[NumericField], theme: &Theme) -> Figure {
    let matrix = correlation_matrix(dataset, fields);
    heatmap_from_matrix(&matrix, theme)
}


fn heatmap_from_matrix(matrix: &CorrelationMatrix, theme: &Theme) -> Figure {
    let names: Vec<String> = matrix.fields.iter().map(|f| f.column().to_string()).collect();
    let text = matrix
        .values
        .iter()
        .map(|row| row.iter().map(|&v| cell_text(v)).collect())
        .collect();

    let mut layout = Layout::titled("Correlation Heatmap of Numeric Variables");
    layout.xaxis = Some(Axis {
        tickangle: Some(45.0),
        ..Axis::titled("Variables")
    });
    layout.yaxis = Some(Axis::titled("Variables"));

    let mut figure = Figure::new(layout);
    figure.push(HeatmapTrace {
        z: matrix.values.clone(),
        x: names.clone(),
        y: names,
        colorscale: theme.sequential_scale.to_string(),
        text,
        texttemplate: "%{text}".to_string(),
        textfont: Font {
            family: None,
            size: Some(12.0),
            color: Some(theme.palette.text.to_string()),
        },
        hoverongaps: false,
    });

    figure
}
