//! Reference catalog records.

use serde::{Deserialize, Serialize};

/// Anything the matcher can score by name.
pub trait HasDisplayName {
    /// The name compared against queries.
    fn display_name(&self) -> &str;
}

/// A medicine in the reference catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicineRecord {
    /// Medicine name, also its identity
    pub name: String,
    /// Free-text description of what it is used for
    pub uses: String,
}

/// A symptom in the reference catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomRecord {
    /// Symptom name, also its identity
    pub symptom: String,
    /// Suggested remedies, in display order
    pub remedies: Vec<String>,
}

impl MedicineRecord {
    /// Create a new medicine record.
    pub fn new(name: impl Into<String>, uses: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uses: uses.into(),
        }
    }
}

impl SymptomRecord {
    /// Create a new symptom record.
    pub fn new<I, S>(symptom: impl Into<String>, remedies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptom: symptom.into(),
            remedies: remedies.into_iter().map(Into::into).collect(),
        }
    }
}

impl HasDisplayName for MedicineRecord {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl HasDisplayName for SymptomRecord {
    fn display_name(&self) -> &str {
        &self.symptom
    }
}
