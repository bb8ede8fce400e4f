//! Scatter charts of salary against one or two predictors.
//!
//! Encoding fallbacks for missing values: a point without a color value is
//! drawn at the midpoint of the observed color range, and a point without a
//! size value gets `NEUTRAL_MARKER_SIZE`. Points missing an axis value are
//! not drawn.

use crate::aggregation::fit_line;
use crate::models::{CategoryFamily, Dataset, NumericField, SalaryRecord};

use super::figure::{
    Axis, ColorBar, ColorValue, Figure, Layout, Line, Marker, PerPoint, Scatter3dTrace,
    ScatterTrace, Scene,
};
use super::theme::Theme;


/// Marker size for points whose size value is missing.
pub const NEUTRAL_MARKER_SIZE: f64 = 6.0;

/// Smallest drawn marker, so zero-valued points stay visible.
const MIN_MARKER_SIZE: f64 = 2.0;

const POINT_OPACITY: f64 = 0.7;


/// Parameters of one salary scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub x: NumericField,
    pub color: NumericField,
    pub size: NumericField,
    pub title: String,
    pub x_title: String,
    pub size_max: f64,
}


/// Parameters of the 3D scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter3dSpec {
    pub x: NumericField,
    pub y: NumericField,
    pub z: NumericField,
    pub color: NumericField,
    pub size: NumericField,
    pub title: String,
    pub size_max: f64,
}


/// Salary-vs-`x` point cloud with an OLS trendline.
pub fn scatter_chart(dataset: &Dataset, spec: &ScatterSpec, theme: &Theme) -> Figure {
    let y_field = NumericField::SalaryAt30;
    let points: Vec<&SalaryRecord> = dataset
        .records()
        .iter()
        .filter(|r| r.value(spec.x).is_some() && r.value(y_field).is_some())
        .collect();

    let x: Vec<f64> = points.iter().filter_map(|r| r.value(spec.x)).collect();
    let y: Vec<f64> = points.iter().filter_map(|r| r.value(y_field)).collect();

    let mut layout = Layout::titled(&spec.title);
    layout.xaxis = Some(Axis::titled(&spec.x_title));
    layout.yaxis = Some(Axis::titled("Salary at 30"));

    let mut figure = Figure::new(layout);
    figure.push(ScatterTrace {
        name: Some(spec.x.column().to_string()),
        mode: "markers".to_string(),
        marker: Some(encoded_marker(&points, spec.color, spec.size, spec.size_max, theme)),
        text: Some(profiles(&points)),
        hovertemplate: Some(format!(
            "%{{text}}<br>{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
            spec.x.column(),
            y_field.column()
        )),
        showlegend: Some(false),
        x,
        y,
        ..Default::default()
    });

    if let Some(trend) = trendline(&points, spec.x, y_field, theme) {
        figure.push(trend);
    }

    figure
}


/// Three-axis point cloud with scene planes in the theme colors.
pub fn scatter3d_chart(dataset: &Dataset, spec: &Scatter3dSpec, theme: &Theme) -> Figure {
    let points: Vec<&SalaryRecord> = dataset
        .records()
        .iter()
        .filter(|r| {
            r.value(spec.x).is_some() && r.value(spec.y).is_some() && r.value(spec.z).is_some()
        })
        .collect();

    let mut layout = Layout::titled(&spec.title);
    layout.scene = Some(Scene {
        xaxis: theme.scene_axis(spec.x.column()),
        yaxis: theme.scene_axis(spec.y.column()),
        zaxis: theme.scene_axis(spec.z.column()),
    });

    let mut figure = Figure::new(layout);
    figure.push(Scatter3dTrace {
        mode: "markers".to_string(),
        x: points.iter().filter_map(|r| r.value(spec.x)).collect(),
        y: points.iter().filter_map(|r| r.value(spec.y)).collect(),
        z: points.iter().filter_map(|r| r.value(spec.z)).collect(),
        marker: encoded_marker(&points, spec.color, spec.size, spec.size_max, theme),
        text: Some(profiles(&points)),
        hovertemplate: Some(format!(
            "%{{text}}<br>{}=%{{x}}<br>{}=%{{y}}<br>{}=%{{z}}<extra></extra>",
            spec.x.column(),
            spec.y.column(),
            spec.z.column()
        )),
    });

    figure
}


/// Hover label per point: education / industry / location, `-` when not one-hot.
fn profiles(points: &[&SalaryRecord]) -> Vec<String> {
    points
        .iter()
        .map(|record| {
            CategoryFamily::ALL
                .iter()
                .map(|&family| record.category(family).unwrap_or("-"))
                .collect::<Vec<_>>()
                .join(" / ")
        })
        .collect()
}


/// Marker with continuous color and size encodings.
fn encoded_marker(
    points: &[&SalaryRecord],
    color_field: NumericField,
    size_field: NumericField,
    size_max: f64,
    theme: &Theme,
) -> Marker {
    let colors: Vec<Option<f64>> = points.iter().map(|r| r.value(color_field)).collect();
    let sizes: Vec<Option<f64>> = points.iter().map(|r| r.value(size_field)).collect();
    let (color_values, range) = encode_colors(&colors);

    Marker {
        color: Some(PerPoint::Each(color_values.into_iter().map(ColorValue::Scaled).collect())),
        size: Some(PerPoint::Each(encode_sizes(&sizes, size_max))),
        opacity: Some(POINT_OPACITY),
        colorscale: Some(theme.sequential_scale.to_string()),
        cmin: range.map(|r| r.0),
        cmax: range.map(|r| r.1),
        showscale: Some(true),
        colorbar: Some(ColorBar {
            title: color_field.column().into(),
        }),
    }
}


/// Map color values onto the scale, filling gaps with the range midpoint.
fn encode_colors(values: &[Option<f64>]) -> (Vec<f64>, Option<(f64, f64)>) {
    let range = values.iter().flatten().fold(None, |acc: Option<(f64, f64)>, &v| {
        Some(match acc {
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
            None => (v, v),
        })
    });
    let midpoint = range.map(|(lo, hi)| (lo + hi) / 2.0).unwrap_or(0.0);

    let encoded = values.iter().map(|v| v.unwrap_or(midpoint)).collect();
    (encoded, range)
}


/// Area-proportional pixel diameters; the largest value maps to `size_max`.
fn encode_sizes(values: &[Option<f64>], size_max: f64) -> Vec<f64> {
    let largest = values.iter().flatten().copied().fold(0.0_f64, f64::max);

    values
        .iter()
        .map(|value| match value {
            Some(v) if largest > 0.0 => {
                let diameter = size_max * (v.max(0.0) / largest).sqrt();
                diameter.clamp(MIN_MARKER_SIZE, size_max)
            }
            Some(_) => MIN_MARKER_SIZE,
            None => NEUTRAL_MARKER_SIZE.min(size_max),
        })
        .collect()
}


/// Fitted line drawn across the sorted distinct x values.
fn trendline(
    points: &[&SalaryRecord],
    x_field: NumericField,
    y_field: NumericField,
    theme: &Theme,
) -> Option<ScatterTrace> {
    let pairs: Vec<(f64, f64)> = points
        .iter()
        .filter_map(|r| Some((r.value(x_field)?, r.value(y_field)?)))
        .collect();
    let fit = fit_line(&pairs)?;

    let mut xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    xs.dedup();
    let ys = xs.iter().map(|&x| fit.predict(x)).collect();

    Some(ScatterTrace {
        name: Some("OLS trendline".to_string()),
        mode: "lines".to_string(),
        x: xs,
        y: ys,
        line: Some(Line {
            color: Some(theme.palette.accent.to_string()),
            width: Some(2.0),
        }),
        hovertemplate: Some(format!(
            "<b>OLS trendline</b><br>{y} = {:.4} * {x} + {:.4}<br>R<sup>2</sup>={:.6}<extra></extra>",
            fit.slope,
            fit.intercept,
            fit.r_squared,
            y = y_field.column(),
            x = x_field.column(),
        )),
        showlegend: Some(false),
        ..Default::default()
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::figure::Trace;

    fn experience_spec() -> ScatterSpec {
        ScatterSpec {
            x: NumericField::WorkExperience,
            color: NumericField::Gpa,
            size: NumericField::Certifications,
            title: "Salary vs Work Experience".into(),
            x_title: "Years of Work Experience".into(),
            size_max: 15.0,
        }
    }

    fn scatter(trace: &Trace) -> &ScatterTrace {
        match trace {
            Trace::Scatter(s) => s,
            other => panic!("expected scatter trace, got {other:?}"),
        }
    }

    #[test]
    fn test_two_point_trendline() {
        let dataset = Dataset::new(vec![
            SalaryRecord::in_categories("PhD", "Tech", "Chicago")
                .with(NumericField::WorkExperience, 1.0)
                .with(NumericField::SalaryAt30, 1.0)
                .with(NumericField::Gpa, 3.0)
                .with(NumericField::Certifications, 2.0),
            SalaryRecord::in_categories("PhD", "Tech", "Chicago")
                .with(NumericField::WorkExperience, 2.0)
                .with(NumericField::SalaryAt30, 2.0)
                .with(NumericField::Gpa, 3.5)
                .with(NumericField::Certifications, 4.0),
        ]);

        let figure = scatter_chart(&dataset, &experience_spec(), &Theme::dark());
        assert_eq!(figure.data.len(), 2);

        let points = scatter(&figure.data[0]);
        assert_eq!(points.x, vec![1.0, 2.0]);
        assert_eq!(points.y, vec![1.0, 2.0]);
        assert_eq!(
            points.text,
            Some(vec!["PhD / Tech / Chicago".to_string(); 2])
        );

        let line = scatter(&figure.data[1]);
        assert_eq!(line.mode, "lines");
        assert_eq!(line.x, vec![1.0, 2.0]);
        assert!((line.y[0] - 1.0).abs() < 1e-9);
        assert!((line.y[1] - 2.0).abs() < 1e-9);
        assert!(line.y[1] > line.y[0]);
    }

    #[test]
    fn test_missing_encodings_use_fallbacks() {
        let dataset = Dataset::new(vec![
            SalaryRecord::default()
                .with(NumericField::WorkExperience, 1.0)
                .with(NumericField::SalaryAt30, 10.0)
                .with(NumericField::Gpa, 2.0)
                .with(NumericField::Certifications, 4.0),
            SalaryRecord::default()
                .with(NumericField::WorkExperience, 2.0)
                .with(NumericField::SalaryAt30, 20.0)
                .with(NumericField::Gpa, 4.0),
            SalaryRecord::default()
                .with(NumericField::WorkExperience, 3.0)
                .with(NumericField::SalaryAt30, 30.0)
                .with(NumericField::Certifications, 1.0),
        ]);

        let figure = scatter_chart(&dataset, &experience_spec(), &Theme::dark());
        let marker = scatter(&figure.data[0]).marker.clone().unwrap();

        assert_eq!(
            marker.color,
            Some(PerPoint::Each(vec![
                ColorValue::Scaled(2.0),
                ColorValue::Scaled(4.0),
                ColorValue::Scaled(3.0),
            ]))
        );
        assert_eq!(marker.cmin, Some(2.0));
        assert_eq!(marker.cmax, Some(4.0));
        assert_eq!(
            marker.size,
            Some(PerPoint::Each(vec![15.0, NEUTRAL_MARKER_SIZE, 7.5]))
        );
    }

    #[test]
    fn test_points_missing_axis_values_are_skipped() {
        let dataset = Dataset::new(vec![
            SalaryRecord::default().with(NumericField::WorkExperience, 1.0),
            SalaryRecord::default().with(NumericField::SalaryAt30, 5.0),
        ]);
        let figure = scatter_chart(&dataset, &experience_spec(), &Theme::dark());
        assert_eq!(figure.data.len(), 1);
        assert!(scatter(&figure.data[0]).x.is_empty());
    }

    #[test]
    fn test_sizes_clamped() {
        let sizes = encode_sizes(&[Some(0.0), Some(100.0), Some(-3.0)], 10.0);
        assert_eq!(sizes, vec![MIN_MARKER_SIZE, 10.0, MIN_MARKER_SIZE]);
    }

    #[test]
    fn test_scatter3d_scene_theming() {
        let dataset = Dataset::new(vec![
            SalaryRecord::default()
                .with(NumericField::WorkExperience, 4.0)
                .with(NumericField::Gpa, 3.2)
                .with(NumericField::SalaryAt30, 70_000.0)
                .with(NumericField::Certifications, 1.0)
                .with(NumericField::NetworkingScore, 60.0),
        ]);
        let spec = Scatter3dSpec {
            x: NumericField::WorkExperience,
            y: NumericField::Gpa,
            z: NumericField::SalaryAt30,
            color: NumericField::Certifications,
            size: NumericField::NetworkingScore,
            title: "3D".into(),
            size_max: 10.0,
        };
        let theme = Theme::dark();
        let figure = scatter3d_chart(&dataset, &spec, &theme);

        let scene = figure.layout.scene.unwrap();
        for axis in [&scene.xaxis, &scene.yaxis, &scene.zaxis] {
            assert_eq!(axis.backgroundcolor.as_deref(), Some(theme.palette.plot_bg));
            assert_eq!(axis.gridcolor.as_deref(), Some(theme.palette.grid));
            assert_eq!(axis.showbackground, Some(true));
        }

        match &figure.data[0] {
            Trace::Scatter3d(trace) => {
                assert_eq!(trace.z, vec![70_000.0]);
                assert_eq!(trace.marker.size, Some(PerPoint::Each(vec![10.0])));
            }
            other => panic!("expected scatter3d trace, got {other:?}"),
        }
    }
}
