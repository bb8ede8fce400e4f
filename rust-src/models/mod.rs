//! Record and dataset models for salary-at-30 career data.

mod dataset;
mod salary_record;

pub use dataset::Dataset;
pub use salary_record::{CategoryFamily, NumericField, SalaryRecord};
