//! Medical data document layout.
//!
//! ```text
//! content.Subsystems[0].Medications.General -> [MedicineRecord]
//! content.Subsystems[1].Categories.General  -> [SymptomRecord]
//! ```

use serde::Deserialize;

use super::{CatalogError, CatalogResult};
use crate::models::{MedicineRecord, SymptomRecord};

#[derive(Debug, Deserialize)]
struct MedicalData {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(rename = "Subsystems")]
    subsystems: Vec<Subsystem>,
}

#[derive(Debug, Deserialize)]
struct Subsystem {
    #[serde(rename = "Medications")]
    medications: Option<Section<MedicineRecord>>,
    #[serde(rename = "Categories")]
    categories: Option<Section<SymptomRecord>>,
}

#[derive(Debug, Deserialize)]
struct Section<R> {
    #[serde(rename = "General")]
    general: Vec<R>,
}

/// Parse the medical data document into medicine and symptom tables.
pub fn parse_medical_data(
    json: &str,
) -> CatalogResult<(Vec<MedicineRecord>, Vec<SymptomRecord>)> {
    let data: MedicalData = serde_json::from_str(json)?;
    let mut subsystems = data.content.subsystems.into_iter();

    let medicines = subsystems
        .next()
        .and_then(|s| s.medications)
        .ok_or(CatalogError::MissingSection(
            "content.Subsystems[0].Medications.General",
        ))?
        .general;

    let symptoms = subsystems
        .next()
        .and_then(|s| s.categories)
        .ok_or(CatalogError::MissingSection(
            "content.Subsystems[1].Categories.General",
        ))?
        .general;

    Ok((medicines, symptoms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_must_be_in_position() {
        // Categories first is not accepted
        let json = r#"{"content": {"Subsystems": [
            {"Categories": {"General": []}},
            {"Medications": {"General": []}}
        ]}}"#;
        assert!(matches!(
            parse_medical_data(json),
            Err(CatalogError::MissingSection(_))
        ));
    }

    #[test]
    fn test_extra_subsystems_ignored() {
        let json = r#"{"content": {"Subsystems": [
            {"Medications": {"General": [{"name": "Aspirin", "uses": "pain"}]}},
            {"Categories": {"General": []}},
            {"Other": {}}
        ]}}"#;
        let (medicines, symptoms) = parse_medical_data(json).unwrap();
        assert_eq!(medicines.len(), 1);
        assert!(symptoms.is_empty());
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_medical_data("not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
