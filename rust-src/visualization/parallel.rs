//! Parallel-coordinates view of every numeric field at once.

use crate::models::{Dataset, NumericField, SalaryRecord};

use super::figure::{ColorBar, ColorValue, Dimension, Figure, Layout, Marker, ParcoordsTrace, PerPoint};
use super::theme::Theme;


fn axis_label(field: NumericField) -> &'static str {
    match field {
        NumericField::WorkExperience => "Experience",
        NumericField::Gpa => "GPA",
        NumericField::Certifications => "Certifications",
        NumericField::Internships => "Internships",
        NumericField::JobChanges => "Job Changes",
        NumericField::NetworkingScore => "Networking",
        NumericField::SalaryAt30 => "Salary",
    }
}


/// One line per record over `fields`, colored by salary.
///
/// Records missing any of the fields are left out so every axis has the same length.
pub fn parallel_coordinates(dataset: &Dataset, fields: &[NumericField], theme: &Theme) -> Figure {
    let complete: Vec<&SalaryRecord> = dataset
        .records()
        .iter()
        .filter(|r| fields.iter().all(|&f| r.value(f).is_some()))
        .filter(|r| r.value(NumericField::SalaryAt30).is_some())
        .collect();

    let dimensions = fields
        .iter()
        .map(|&field| Dimension {
            label: axis_label(field).to_string(),
            values: complete.iter().filter_map(|r| r.value(field)).collect(),
        })
        .collect();

    let salaries = complete
        .iter()
        .filter_map(|r| r.value(NumericField::SalaryAt30))
        .map(ColorValue::Scaled)
        .collect();

    let mut figure = Figure::new(Layout::titled("Multi-Factor Career Analysis"));
    figure.push(ParcoordsTrace {
        line: Marker {
            color: Some(PerPoint::Each(salaries)),
            colorscale: Some(theme.sequential_scale.to_string()),
            showscale: Some(true),
            colorbar: Some(ColorBar {
                title: "Salary at 30".into(),
            }),
            ..Default::default()
        },
        dimensions,
    });

    figure
}
