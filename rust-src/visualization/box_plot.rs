//! Salary distribution per category label.

use crate::models::{CategoryFamily, Dataset, NumericField};

use super::figure::{Axis, BoxTrace, ColorValue, Figure, Layout, Line, Marker, PerPoint};


/// Parameters of one categorical box chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBoxSpec {
    pub family: CategoryFamily,
    pub labels: Vec<String>,
    pub colors: Vec<String>,
    pub title: String,
}


impl CategoryBoxSpec {
    /// Chart over every declared label of `family`.
    pub fn for_family(family: CategoryFamily, colors: Vec<String>) -> Self {
        Self {
            family,
            labels: family.labels().iter().map(|l| l.to_string()).collect(),
            colors,
            title: format!("Salary Distribution by {}", family.title()),
        }
    }
}


/// One box per label, in label order. Labels without members get an empty box.
pub fn category_box_chart(dataset: &Dataset, spec: &CategoryBoxSpec) -> Figure {
    let mut layout = Layout::titled(&spec.title);
    layout.yaxis = Some(Axis::titled("Salary at 30"));
    layout.showlegend = Some(true);
    layout.boxmode = Some("group".to_string());
    layout.boxgap = Some(0.3);

    let mut figure = Figure::new(layout);
    for (i, label) in spec.labels.iter().enumerate() {
        let color = if spec.colors.is_empty() {
            "white".to_string()
        } else {
            spec.colors[i % spec.colors.len()].clone()
        };

        figure.push(BoxTrace {
            name: label.clone(),
            y: dataset.values_for(NumericField::SalaryAt30, spec.family, label),
            boxpoints: "outliers".to_string(),
            boxmean: true,
            marker: Marker {
                color: Some(PerPoint::Uniform(ColorValue::Css(color.clone()))),
                size: Some(PerPoint::Uniform(5.0)),
                opacity: Some(0.7),
                ..Default::default()
            },
            line: Line {
                color: Some("white".to_string()),
                width: Some(2.0),
            },
            fillcolor: color,
            opacity: 0.8,
            whiskerwidth: 0.8,
        });
    }

    figure
}
