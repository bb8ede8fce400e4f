//! Chart description model, serialized as Plotly figure JSON.
//!
//! Only the attributes the dashboard sets are modelled; `None` fields are
//! omitted so Plotly falls back to its own defaults.

use serde::Serialize;


/// A complete chart: traces plus layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}


impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn push(&mut self, trace: impl Into<Trace>) {
        self.data.push(trace.into());
    }
}


/// One series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Box(BoxTrace),
    Scatter(ScatterTrace),
    Scatter3d(Scatter3dTrace),
    Heatmap(HeatmapTrace),
    Parcoords(ParcoordsTrace),
}


impl From<BoxTrace> for Trace {
    fn from(trace: BoxTrace) -> Self {
        Trace::Box(trace)
    }
}


impl From<ScatterTrace> for Trace {
    fn from(trace: ScatterTrace) -> Self {
        Trace::Scatter(trace)
    }
}


impl From<Scatter3dTrace> for Trace {
    fn from(trace: Scatter3dTrace) -> Self {
        Trace::Scatter3d(trace)
    }
}


impl From<HeatmapTrace> for Trace {
    fn from(trace: HeatmapTrace) -> Self {
        Trace::Heatmap(trace)
    }
}


impl From<ParcoordsTrace> for Trace {
    fn from(trace: ParcoordsTrace) -> Self {
        Trace::Parcoords(trace)
    }
}


/// Box plot over raw samples; Plotly derives quartiles from `y`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxTrace {
    pub name: String,
    pub y: Vec<f64>,
    pub boxpoints: String,
    pub boxmean: bool,
    pub marker: Marker,
    pub line: Line,
    pub fillcolor: String,
    pub opacity: f64,
    pub whiskerwidth: f64,
}


/// 2D points or lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScatterTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}


/// 3D point cloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scatter3dTrace {
    pub mode: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}


/// Cell grid with per-cell text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapTrace {
    pub z: Vec<Vec<Option<f64>>>,
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub colorscale: String,
    pub text: Vec<Vec<String>>,
    pub texttemplate: String,
    pub textfont: Font,
    pub hoverongaps: bool,
}


/// One polyline per record across parallel vertical axes.
///
/// `line` takes the same color attributes as a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcoordsTrace {
    pub line: Marker,
    pub dimensions: Vec<Dimension>,
}


/// One vertical axis of a parallel-coordinates chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub label: String,
    pub values: Vec<f64>,
}


/// Either one value for every point or one value per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PerPoint<T> {
    Uniform(T),
    Each(Vec<T>),
}


#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<PerPoint<ColorValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<PerPoint<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}


/// A literal CSS color or a number mapped through the color scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Css(String),
    Scaled(f64),
}


#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}


impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}


/// Cartesian or scene axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linecolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zerolinecolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backgroundcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showbackground: Option<bool>,
}


impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Some(text.into()),
            ..Default::default()
        }
    }
}


#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HoverLabel {
    pub bgcolor: String,
    pub font: Font,
}


#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxgap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverlabel: Option<HoverLabel>,
}


impl Layout {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Some(text.into()),
            ..Default::default()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_type_tag() {
        let trace: Trace = ScatterTrace {
            mode: "lines".to_string(),
            x: vec![1.0],
            y: vec![2.0],
            ..Default::default()
        }
        .into();

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], "scatter");
        assert_eq!(value["mode"], "lines");
        assert!(value.get("marker").is_none());
    }

    #[test]
    fn test_per_point_untagged() {
        let marker = Marker {
            color: Some(PerPoint::Each(vec![ColorValue::Scaled(1.5), ColorValue::Scaled(2.0)])),
            size: Some(PerPoint::Uniform(5.0)),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&marker).unwrap(),
            json!({ "color": [1.5, 2.0], "size": 5.0 })
        );
    }

    #[test]
    fn test_undefined_heat_cells_are_null() {
        let trace = HeatmapTrace {
            z: vec![vec![Some(1.0), None]],
            x: vec!["a".into(), "b".into()],
            y: vec!["a".into()],
            colorscale: "Viridis".into(),
            text: vec![vec!["1.00".into(), String::new()]],
            texttemplate: "%{text}".into(),
            textfont: Font::default(),
            hoverongaps: false,
        };
        let value = serde_json::to_value(Trace::from(trace)).unwrap();
        assert_eq!(value["type"], "heatmap");
        assert_eq!(value["z"], json!([[1.0, null]]));
    }
}
