//! Statistics over the salary dataset.

mod box_stats;
mod correlation;
mod regression;
mod summary;

pub use box_stats::BoxStats;
pub use correlation::{correlation_matrix, CorrelationMatrix};
pub use regression::fit_line;
pub use summary::{summarize, CategoryBreakdown, SalarySummary};
