//! Every chart the server can render, addressed by its stable id.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::{CategoryFamily, Dataset, NumericField};

use super::box_plot::{category_box_chart, CategoryBoxSpec};
use super::figure::Figure;
use super::heatmap::correlation_heatmap;
use super::parallel::parallel_coordinates;
use super::scatter::{scatter3d_chart, scatter_chart, Scatter3dSpec, ScatterSpec};
use super::theme::Theme;


/// Stable chart identifier, shared by the page placeholders and the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartId {
    #[serde(rename = "education-salary-box")]
    EducationBox,
    #[serde(rename = "industry-salary-box")]
    IndustryBox,
    #[serde(rename = "location-salary-box")]
    LocationBox,
    #[serde(rename = "experience-salary-scatter")]
    ExperienceScatter,
    #[serde(rename = "gpa-salary-scatter")]
    GpaScatter,
    #[serde(rename = "certifications-salary-scatter")]
    CertificationsScatter,
    #[serde(rename = "3d-scatter")]
    Scatter3d,
    #[serde(rename = "correlation-heatmap")]
    CorrelationHeatmap,
    /// Served by the API only; not one of the page placeholders.
    #[serde(rename = "parallel-coordinates")]
    ParallelCoordinates,
}


/// Unknown chart id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart '{0}'")]
pub struct UnknownChart(pub String);


impl ChartId {
    pub const ALL: [ChartId; 9] = [
        ChartId::EducationBox,
        ChartId::IndustryBox,
        ChartId::LocationBox,
        ChartId::ExperienceScatter,
        ChartId::GpaScatter,
        ChartId::CertificationsScatter,
        ChartId::Scatter3d,
        ChartId::CorrelationHeatmap,
        ChartId::ParallelCoordinates,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ChartId::EducationBox => "education-salary-box",
            ChartId::IndustryBox => "industry-salary-box",
            ChartId::LocationBox => "location-salary-box",
            ChartId::ExperienceScatter => "experience-salary-scatter",
            ChartId::GpaScatter => "gpa-salary-scatter",
            ChartId::CertificationsScatter => "certifications-salary-scatter",
            ChartId::Scatter3d => "3d-scatter",
            ChartId::CorrelationHeatmap => "correlation-heatmap",
            ChartId::ParallelCoordinates => "parallel-coordinates",
        }
    }

    /// Category family of the three box charts.
    pub fn box_family(self) -> Option<CategoryFamily> {
        match self {
            ChartId::EducationBox => Some(CategoryFamily::Education),
            ChartId::IndustryBox => Some(CategoryFamily::Industry),
            ChartId::LocationBox => Some(CategoryFamily::Location),
            ChartId::ExperienceScatter
            | ChartId::GpaScatter
            | ChartId::CertificationsScatter
            | ChartId::Scatter3d
            | ChartId::CorrelationHeatmap
            | ChartId::ParallelCoordinates => None,
        }
    }

    /// Box chart parameters, for the three categorical charts.
    pub fn box_spec(self, theme: &Theme) -> Option<CategoryBoxSpec> {
        self.box_family().map(|family| family_box(family, theme))
    }

    /// Build the chart and apply the theme. The only path charts leave by.
    pub fn render(self, dataset: &Dataset, theme: &Theme) -> Figure {
        theme.apply(self.produce(dataset, theme))
    }

    fn produce(self, dataset: &Dataset, theme: &Theme) -> Figure {
        match self {
            ChartId::EducationBox => {
                category_box_chart(dataset, &family_box(CategoryFamily::Education, theme))
            }
            ChartId::IndustryBox => {
                category_box_chart(dataset, &family_box(CategoryFamily::Industry, theme))
            }
            ChartId::LocationBox => {
                category_box_chart(dataset, &family_box(CategoryFamily::Location, theme))
            }
            ChartId::ExperienceScatter => scatter_chart(dataset, &experience_scatter(), theme),
            ChartId::GpaScatter => scatter_chart(dataset, &gpa_scatter(), theme),
            ChartId::CertificationsScatter => {
                scatter_chart(dataset, &certifications_scatter(), theme)
            }
            ChartId::Scatter3d => scatter3d_chart(dataset, &experience_gpa_salary_cloud(), theme),
            ChartId::CorrelationHeatmap => correlation_heatmap(dataset, &NumericField::ALL, theme),
            ChartId::ParallelCoordinates => {
                parallel_coordinates(dataset, &NumericField::ALL, theme)
            }
        }
    }
}


/// Pastel slices: 3 colors for education, 4 each for industry and location.
fn family_box(family: CategoryFamily, theme: &Theme) -> CategoryBoxSpec {
    let colors = match family {
        CategoryFamily::Education => theme.pastel(0..3),
        CategoryFamily::Industry => theme.pastel(3..7),
        CategoryFamily::Location => theme.pastel(7..11),
    };
    CategoryBoxSpec::for_family(family, colors)
}


fn salary_scatter(
    x: NumericField,
    color: NumericField,
    size: NumericField,
    title: &str,
    x_title: &str,
) -> ScatterSpec {
    ScatterSpec {
        x,
        color,
        size,
        title: title.to_string(),
        x_title: x_title.to_string(),
        size_max: 15.0,
    }
}


fn experience_scatter() -> ScatterSpec {
    salary_scatter(
        NumericField::WorkExperience,
        NumericField::Gpa,
        NumericField::Certifications,
        "Salary vs Work Experience",
        "Years of Work Experience",
    )
}


fn gpa_scatter() -> ScatterSpec {
    salary_scatter(
        NumericField::Gpa,
        NumericField::WorkExperience,
        NumericField::NetworkingScore,
        "Salary vs GPA",
        "GPA",
    )
}


fn certifications_scatter() -> ScatterSpec {
    salary_scatter(
        NumericField::Certifications,
        NumericField::NetworkingScore,
        NumericField::WorkExperience,
        "Salary vs Number of Certifications",
        "Number of Certifications",
    )
}


fn experience_gpa_salary_cloud() -> Scatter3dSpec {
    Scatter3dSpec {
        x: NumericField::WorkExperience,
        y: NumericField::Gpa,
        z: NumericField::SalaryAt30,
        color: NumericField::Certifications,
        size: NumericField::NetworkingScore,
        title: "3D Relationship: Work Experience, GPA, and Salary".to_string(),
        size_max: 10.0,
    }
}


impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


impl FromStr for ChartId {
    type Err = UnknownChart;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownChart(s.to_string()))
    }
}
