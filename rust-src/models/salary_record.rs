//! Salary record model with its numeric fields and one-hot category families.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};


/// Numeric column of a salary record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumericField {
    WorkExperience,
    Gpa,
    Certifications,
    Internships,
    JobChanges,
    NetworkingScore,
    SalaryAt30,
}


impl NumericField {
    /// Every numeric column, in CSV order.
    pub const ALL: [NumericField; 7] = [
        NumericField::WorkExperience,
        NumericField::Gpa,
        NumericField::Certifications,
        NumericField::Internships,
        NumericField::JobChanges,
        NumericField::NetworkingScore,
        NumericField::SalaryAt30,
    ];

    /// Column header as it appears in the CSV file.
    pub fn column(self) -> &'static str {
        match self {
            NumericField::WorkExperience => "Work_Experience",
            NumericField::Gpa => "GPA",
            NumericField::Certifications => "Certifications",
            NumericField::Internships => "Internships",
            NumericField::JobChanges => "Job_Changes",
            NumericField::NetworkingScore => "Networking_Score",
            NumericField::SalaryAt30 => "Salary_at_30",
        }
    }
}


impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}


/// A family of one-hot encoded boolean columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoryFamily {
    Education,
    Industry,
    Location,
}


impl CategoryFamily {
    pub const ALL: [CategoryFamily; 3] = [
        CategoryFamily::Education,
        CategoryFamily::Industry,
        CategoryFamily::Location,
    ];

    /// Column prefix shared by every flag in the family.
    pub fn prefix(self) -> &'static str {
        match self {
            CategoryFamily::Education => "Education",
            CategoryFamily::Industry => "Industry",
            CategoryFamily::Location => "Location",
        }
    }

    /// Declared labels, in column order.
    pub fn labels(self) -> &'static [&'static str] {
        match self {
            CategoryFamily::Education => &["High School", "Master", "PhD"],
            CategoryFamily::Industry => &["Finance", "Healthcare", "Retail", "Tech"],
            CategoryFamily::Location => &["Chicago", "Los Angeles", "New York", "San Francisco"],
        }
    }

    /// Human-readable family name for titles.
    pub fn title(self) -> &'static str {
        match self {
            CategoryFamily::Education => "Education Level",
            CategoryFamily::Industry => "Industry",
            CategoryFamily::Location => "Location",
        }
    }

    /// CSV column for a label, e.g. `Education_High School`.
    pub fn column(self, label: &str) -> String {
        format!("{}_{}", self.prefix(), label)
    }
}


/// One row of the salary dataset.
///
/// Numeric cells are optional: an empty CSV cell deserializes to `None`.
/// Extra columns such as `Skills` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryRecord {
    #[serde(rename = "Work_Experience")]
    pub work_experience: Option<f64>,
    #[serde(rename = "GPA")]
    pub gpa: Option<f64>,
    #[serde(rename = "Certifications")]
    pub certifications: Option<f64>,
    #[serde(rename = "Internships")]
    pub internships: Option<f64>,
    #[serde(rename = "Job_Changes")]
    pub job_changes: Option<f64>,
    #[serde(rename = "Networking_Score")]
    pub networking_score: Option<f64>,
    #[serde(rename = "Salary_at_30")]
    pub salary_at_30: Option<f64>,

    #[serde(rename = "Education_High School", deserialize_with = "deserialize_flag")]
    pub education_high_school: bool,
    #[serde(rename = "Education_Master", deserialize_with = "deserialize_flag")]
    pub education_master: bool,
    #[serde(rename = "Education_PhD", deserialize_with = "deserialize_flag")]
    pub education_phd: bool,

    #[serde(rename = "Industry_Finance", deserialize_with = "deserialize_flag")]
    pub industry_finance: bool,
    #[serde(rename = "Industry_Healthcare", deserialize_with = "deserialize_flag")]
    pub industry_healthcare: bool,
    #[serde(rename = "Industry_Retail", deserialize_with = "deserialize_flag")]
    pub industry_retail: bool,
    #[serde(rename = "Industry_Tech", deserialize_with = "deserialize_flag")]
    pub industry_tech: bool,

    #[serde(rename = "Location_Chicago", deserialize_with = "deserialize_flag")]
    pub location_chicago: bool,
    #[serde(rename = "Location_Los Angeles", deserialize_with = "deserialize_flag")]
    pub location_los_angeles: bool,
    #[serde(rename = "Location_New York", deserialize_with = "deserialize_flag")]
    pub location_new_york: bool,
    #[serde(rename = "Location_San Francisco", deserialize_with = "deserialize_flag")]
    pub location_san_francisco: bool,
}


impl SalaryRecord {
    /// Get a numeric field (None if the cell was empty).
    pub fn value(&self, field: NumericField) -> Option<f64> {
        let value = match field {
            NumericField::WorkExperience => self.work_experience,
            NumericField::Gpa => self.gpa,
            NumericField::Certifications => self.certifications,
            NumericField::Internships => self.internships,
            NumericField::JobChanges => self.job_changes,
            NumericField::NetworkingScore => self.networking_score,
            NumericField::SalaryAt30 => self.salary_at_30,
        };
        value.filter(|v| v.is_finite())
    }

    /// Get the one-hot flag for a label.
    ///
    /// Returns `None` when the label is not a column of the family.
    pub fn flag(&self, family: CategoryFamily, label: &str) -> Option<bool> {
        let flag = match (family, label) {
            (CategoryFamily::Education, "High School") => self.education_high_school,
            (CategoryFamily::Education, "Master") => self.education_master,
            (CategoryFamily::Education, "PhD") => self.education_phd,
            (CategoryFamily::Industry, "Finance") => self.industry_finance,
            (CategoryFamily::Industry, "Healthcare") => self.industry_healthcare,
            (CategoryFamily::Industry, "Retail") => self.industry_retail,
            (CategoryFamily::Industry, "Tech") => self.industry_tech,
            (CategoryFamily::Location, "Chicago") => self.location_chicago,
            (CategoryFamily::Location, "Los Angeles") => self.location_los_angeles,
            (CategoryFamily::Location, "New York") => self.location_new_york,
            (CategoryFamily::Location, "San Francisco") => self.location_san_francisco,
            _ => return None,
        };
        Some(flag)
    }

    /// Check whether the record belongs to a label (unknown labels never match).
    pub fn is_member(&self, family: CategoryFamily, label: &str) -> bool {
        self.flag(family, label).unwrap_or(false)
    }

    /// Number of true flags in a family. Exactly one for well-formed records.
    pub fn flags_set(&self, family: CategoryFamily) -> usize {
        family
            .labels()
            .iter()
            .filter(|label| self.is_member(family, label))
            .count()
    }

    /// The single label the record belongs to, if the family is well-formed.
    pub fn category(&self, family: CategoryFamily) -> Option<&'static str> {
        if self.flags_set(family) != 1 {
            return None;
        }
        family
            .labels()
            .iter()
            .copied()
            .find(|label| self.is_member(family, label))
    }

    /// Check the exactly-one-flag-per-family invariant.
    pub fn is_one_hot(&self) -> bool {
        CategoryFamily::ALL
            .iter()
            .all(|&family| self.flags_set(family) == 1)
    }
}


#[cfg(test)]
impl SalaryRecord {
    /// Build a record in the given categories with no numeric values.
    pub fn in_categories(education: &str, industry: &str, location: &str) -> Self {
        let mut record = SalaryRecord::default();
        record.set_flag(CategoryFamily::Education, education);
        record.set_flag(CategoryFamily::Industry, industry);
        record.set_flag(CategoryFamily::Location, location);
        record
    }

    /// Set a numeric field, builder-style.
    pub fn with(mut self, field: NumericField, value: f64) -> Self {
        let slot = match field {
            NumericField::WorkExperience => &mut self.work_experience,
            NumericField::Gpa => &mut self.gpa,
            NumericField::Certifications => &mut self.certifications,
            NumericField::Internships => &mut self.internships,
            NumericField::JobChanges => &mut self.job_changes,
            NumericField::NetworkingScore => &mut self.networking_score,
            NumericField::SalaryAt30 => &mut self.salary_at_30,
        };
        *slot = Some(value);
        self
    }

    fn set_flag(&mut self, family: CategoryFamily, label: &str) {
        let slot = match (family, label) {
            (CategoryFamily::Education, "High School") => &mut self.education_high_school,
            (CategoryFamily::Education, "Master") => &mut self.education_master,
            (CategoryFamily::Education, "PhD") => &mut self.education_phd,
            (CategoryFamily::Industry, "Finance") => &mut self.industry_finance,
            (CategoryFamily::Industry, "Healthcare") => &mut self.industry_healthcare,
            (CategoryFamily::Industry, "Retail") => &mut self.industry_retail,
            (CategoryFamily::Industry, "Tech") => &mut self.industry_tech,
            (CategoryFamily::Location, "Chicago") => &mut self.location_chicago,
            (CategoryFamily::Location, "Los Angeles") => &mut self.location_los_angeles,
            (CategoryFamily::Location, "New York") => &mut self.location_new_york,
            (CategoryFamily::Location, "San Francisco") => &mut self.location_san_francisco,
            _ => return,
        };
        *slot = true;
    }
}


/// Accept the boolean spellings pandas and spreadsheets write.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid boolean flag: {raw:?}"))
    })
}


fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "1.0" | "yes" => Some(true),
        "false" | "0" | "0.0" | "no" | "" => Some(false),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_spellings() {
        assert_eq!(parse_flag("True"), Some(true));
        assert_eq!(parse_flag(" false "), Some(false));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("0.0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_family_columns() {
        assert_eq!(CategoryFamily::Education.column("High School"), "Education_High School");
        assert_eq!(CategoryFamily::Location.labels().len(), 4);
        assert_eq!(NumericField::SalaryAt30.to_string(), "Salary_at_30");
    }

    #[test]
    fn test_category_lookup() {
        let record = SalaryRecord::in_categories("Master", "Tech", "Chicago");
        assert_eq!(record.category(CategoryFamily::Education), Some("Master"));
        assert_eq!(record.category(CategoryFamily::Industry), Some("Tech"));
        assert!(record.is_one_hot());
        assert_eq!(record.flag(CategoryFamily::Education, "Bachelor"), None);
        assert!(!record.is_member(CategoryFamily::Education, "Bachelor"));
    }

    #[test]
    fn test_record_without_flags_is_not_one_hot() {
        let record = SalaryRecord::default();
        assert_eq!(record.category(CategoryFamily::Education), None);
        assert_eq!(record.flags_set(CategoryFamily::Industry), 0);
        assert!(!record.is_one_hot());
    }

    #[test]
    fn test_non_finite_values_are_missing() {
        let record = SalaryRecord::default().with(NumericField::Gpa, f64::NAN);
        assert_eq!(record.value(NumericField::Gpa), None);
    }
}
