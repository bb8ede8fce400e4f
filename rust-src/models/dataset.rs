//! Immutable in-memory table of salary records.

use super::{CategoryFamily, NumericField, SalaryRecord};


/// Ordered, read-only collection of records loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SalaryRecord>,
}


impl Dataset {
    pub fn new(records: Vec<SalaryRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Column values in record order, with `None` for missing cells.
    pub fn column(&self, field: NumericField) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.value(field)).collect()
    }

    /// Present values of `field` for records that belong to `label`.
    pub fn values_for(&self, field: NumericField, family: CategoryFamily, label: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.is_member(family, label))
            .filter_map(|r| r.value(field))
            .collect()
    }

    /// Records violating the one-flag-per-family invariant, as `(row, family)` pairs.
    pub fn one_hot_violations(&self) -> Vec<(usize, CategoryFamily)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| !record.is_one_hot())
            .flat_map(|(row, record)| {
                CategoryFamily::ALL
                    .into_iter()
                    .filter(move |&family| record.flags_set(family) != 1)
                    .map(move |family| (row, family))
            })
            .collect()
    }
}


impl FromIterator<SalaryRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SalaryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
