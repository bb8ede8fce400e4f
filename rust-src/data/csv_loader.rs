//! CSV loader for salary records.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{CategoryFamily, Dataset, NumericField, SalaryRecord};


/// Every column the loader requires: the numeric fields and one flag per category label.
pub fn required_columns() -> Vec<String> {
    let numeric = NumericField::ALL.iter().map(|field| field.column().to_string());
    let flags = CategoryFamily::ALL
        .iter()
        .flat_map(|&family| family.labels().iter().map(move |label| family.column(label)));
    numeric.chain(flags).collect()
}


/// Failure while loading the dataset. All variants abort startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open data file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("malformed row {row}: {source}")]
    Row {
        row: u64,
        #[source]
        source: csv::Error,
    },
    #[error("data file contains no records")]
    Empty,
    #[error("{count} record(s) violate one-hot encoding, first at row {first_row} ({family:?})")]
    OneHotViolation {
        count: usize,
        first_row: usize,
        family: CategoryFamily,
    },
}


/// Loader behaviour switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Treat records without exactly one flag per family as fatal.
    pub strict: bool,
}


/// Load the dataset from a CSV file.
pub fn load_dataset(path: &Path, options: LoadOptions) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = read_dataset(file, options)?;
    info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}


/// Load the dataset from any reader.
pub fn read_dataset<R: Read>(source: R, options: LoadOptions) -> Result<Dataset, LoadError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);
    read_records(reader, options)
}


fn read_records<R: Read>(mut reader: csv::Reader<R>, options: LoadOptions) -> Result<Dataset, LoadError> {
    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    let required = required_columns();

    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().any(|h| h == column.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let ignored: Vec<&str> = headers
        .iter()
        .filter(|h| !required.iter().any(|column| column == h))
        .collect();
    if !ignored.is_empty() {
        debug!("Ignoring extra columns: {}", ignored.join(", "));
    }

    let mut records = Vec::new();
    for result in reader.deserialize::<SalaryRecord>() {
        match result {
            Ok(record) => records.push(record),
            Err(source) => {
                let row = source.position().map(|p| p.line()).unwrap_or(0);
                return Err(LoadError::Row { row, source });
            }
        }
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    let dataset = Dataset::new(records);
    check_one_hot(&dataset, options)?;
    Ok(dataset)
}


/// Count records breaking the one-hot rule; warn by default, fail in strict mode.
fn check_one_hot(dataset: &Dataset, options: LoadOptions) -> Result<(), LoadError> {
    let violations = dataset.one_hot_violations();
    let Some(&(first_row, family)) = violations.first() else {
        return Ok(());
    };

    if options.strict {
        let rows: HashSet<usize> = violations.iter().map(|&(row, _)| row).collect();
        return Err(LoadError::OneHotViolation {
            count: rows.len(),
            first_row,
            family,
        });
    }

    for family in CategoryFamily::ALL {
        let count = violations.iter().filter(|(_, f)| *f == family).count();
        if count > 0 {
            warn!(
                "{} record(s) do not have exactly one {} flag",
                count,
                family.prefix()
            );
        }
    }

    Ok(())
}
