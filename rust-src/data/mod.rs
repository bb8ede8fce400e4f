//! Data access layer for the salary CSV.

mod csv_loader;

pub use csv_loader::{load_dataset, LoadOptions};
