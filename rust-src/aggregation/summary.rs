//! Headline salary figures and per-category breakdowns.

use serde::Serialize;

use super::BoxStats;
use crate::models::{CategoryFamily, Dataset, NumericField};


/// Salary statistics for one category label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub label: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
}


/// All labels of one family, in declared order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub family: CategoryFamily,
    pub groups: Vec<GroupSummary>,
}


/// Overall salary figures plus every family breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalarySummary {
    pub records: usize,
    pub salaries: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub breakdowns: Vec<CategoryBreakdown>,
}


/// Summarize salary at 30 across the dataset.
pub fn summarize(dataset: &Dataset) -> SalarySummary {
    let salaries: Vec<f64> = dataset
        .column(NumericField::SalaryAt30)
        .into_iter()
        .flatten()
        .collect();
    let overall = BoxStats::from_values(&salaries);

    let breakdowns = CategoryFamily::ALL
        .into_iter()
        .map(|family| CategoryBreakdown {
            family,
            groups: family
                .labels()
                .iter()
                .map(|label| summarize_group(dataset, family, label))
                .collect(),
        })
        .collect();

    SalarySummary {
        records: dataset.len(),
        salaries: salaries.len(),
        mean: overall.as_ref().map(|s| s.mean),
        median: overall.as_ref().map(|s| s.median),
        min: overall.as_ref().map(|s| s.min),
        max: overall.as_ref().map(|s| s.max),
        breakdowns,
    }
}


fn summarize_group(dataset: &Dataset, family: CategoryFamily, label: &str) -> GroupSummary {
    let values = dataset.values_for(NumericField::SalaryAt30, family, label);
    let stats = BoxStats::from_values(&values);
    GroupSummary {
        label: label.to_string(),
        count: values.len(),
        mean: stats.as_ref().map(|s| s.mean),
        median: stats.as_ref().map(|s| s.median),
    }
}
