//! Read-only reference data: medicines, symptoms and compound phrases.
//!
//! Loaded once at startup. Any malformed input is a [`CatalogError`] and the
//! caller must not serve queries without a fully loaded catalog.

mod loader;
mod phrases;

pub use loader::*;
pub use phrases::*;

use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::{HasDisplayName, MedicineRecord, SymptomRecord};

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing section: {0}")]
    MissingSection(&'static str),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid compound phrase: {0}")]
    InvalidPhrase(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Medicine and symptom tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceCatalog {
    medicines: Vec<MedicineRecord>,
    symptoms: Vec<SymptomRecord>,
}

impl ReferenceCatalog {
    /// Build a catalog from in-memory records, validating names.
    pub fn new(
        medicines: Vec<MedicineRecord>,
        symptoms: Vec<SymptomRecord>,
    ) -> CatalogResult<Self> {
        ensure_named(&medicines, "medicine")?;
        ensure_named(&symptoms, "symptom")?;
        Ok(Self {
            medicines,
            symptoms,
        })
    }

    /// Parse the medical data document.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let (medicines, symptoms) = parse_medical_data(json)?;
        let catalog = Self::new(medicines, symptoms)?;
        info!(
            medicines = catalog.medicines.len(),
            symptoms = catalog.symptoms.len(),
            "Reference catalog loaded"
        );
        Ok(catalog)
    }

    /// Load the medical data document from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// All medicines, in source order.
    pub fn medicines(&self) -> &[MedicineRecord] {
        &self.medicines
    }

    /// All symptoms, in source order.
    pub fn symptoms(&self) -> &[SymptomRecord] {
        &self.symptoms
    }
}

fn ensure_named<R: HasDisplayName>(records: &[R], kind: &str) -> CatalogResult<()> {
    for (index, record) in records.iter().enumerate() {
        if record.display_name().trim().is_empty() {
            return Err(CatalogError::InvalidRecord(format!(
                "{} at index {} has an empty name",
                kind, index
            )));
        }
    }
    Ok(())
}
