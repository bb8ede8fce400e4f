//! Dark dashboard theme and the applier every chart passes through.

use super::figure::{Axis, Figure, Font, HoverLabel, Margin};


/// Named colors of the dark scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
    pub plot_bg: &'static str,
    pub paper_bg: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
}


/// Plotly's qualitative "Pastel" palette.
pub const PASTEL: [&str; 11] = [
    "rgb(102, 197, 204)",
    "rgb(246, 207, 113)",
    "rgb(248, 156, 116)",
    "rgb(220, 176, 242)",
    "rgb(135, 197, 95)",
    "rgb(158, 185, 243)",
    "rgb(254, 136, 177)",
    "rgb(201, 219, 116)",
    "rgb(139, 224, 164)",
    "rgb(180, 151, 231)",
    "rgb(179, 179, 179)",
];


/// Stops of the sequential "Viridis" scale, low to high.
pub const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e",
    "#1f9e89", "#35b779", "#6ece58", "#b5de2b", "#fde725",
];


/// Process-wide visual configuration. Built once, shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub font_family: &'static str,
    pub font_size: f64,
    pub hover_font_size: f64,
    pub margin: u32,
    pub hovermode: &'static str,
    pub sequential_scale: &'static str,
}


impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}


impl Theme {
    /// The slate-blue dark scheme used by the dashboard.
    pub fn dark() -> Self {
        Self {
            palette: Palette {
                background: "#0f172a",
                text: "#e2e8f0",
                grid: "#1e293b",
                plot_bg: "#1e293b",
                paper_bg: "#0f172a",
                accent: "#3b82f6",
                success: "#10b981",
                warning: "#f59e0b",
                danger: "#ef4444",
            },
            font_family: "Inter, system-ui, -apple-system, sans-serif",
            font_size: 14.0,
            hover_font_size: 12.0,
            margin: 50,
            hovermode: "x unified",
            sequential_scale: "Viridis",
        }
    }

    /// Base font in the theme's text color.
    pub fn font(&self) -> Font {
        Font {
            family: Some(self.font_family.to_string()),
            size: Some(self.font_size),
            color: Some(self.palette.text.to_string()),
        }
    }

    /// Slice of the Pastel palette, e.g. `3..7` for four colors.
    pub fn pastel(&self, range: std::ops::Range<usize>) -> Vec<String> {
        PASTEL[range].iter().map(|c| c.to_string()).collect()
    }

    /// Axis with the theme's scene-plane styling (3D charts).
    pub fn scene_axis(&self, title: &str) -> Axis {
        Axis {
            title: Some(title.into()),
            backgroundcolor: Some(self.palette.plot_bg.to_string()),
            gridcolor: Some(self.palette.grid.to_string()),
            zerolinecolor: Some(self.palette.grid.to_string()),
            showbackground: Some(true),
            ..Default::default()
        }
    }

    /// Overwrite the themed layout attributes of a figure.
    ///
    /// Idempotent. Axis titles and tick angles already on the figure are kept.
    pub fn apply(&self, mut figure: Figure) -> Figure {
        let grid = self.palette.grid;
        let layout = &mut figure.layout;

        layout.plot_bgcolor = Some(self.palette.plot_bg.to_string());
        layout.paper_bgcolor = Some(self.palette.paper_bg.to_string());
        layout.font = Some(self.font());

        for axis in [&mut layout.xaxis, &mut layout.yaxis] {
            let axis = axis.get_or_insert_with(Axis::default);
            axis.gridcolor = Some(grid.to_string());
            axis.linecolor = Some(grid.to_string());
            axis.zerolinecolor = Some(grid.to_string());
        }

        layout.margin = Some(Margin {
            l: self.margin,
            r: self.margin,
            t: self.margin,
            b: self.margin,
        });
        layout.hovermode = Some(self.hovermode.to_string());
        layout.hoverlabel = Some(HoverLabel {
            bgcolor: self.palette.plot_bg.to_string(),
            font: Font {
                family: Some(self.font_family.to_string()),
                size: Some(self.hover_font_size),
                color: None,
            },
        });

        figure
    }
}
