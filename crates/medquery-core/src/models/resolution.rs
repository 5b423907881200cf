//! Query resolution models.

use serde::{Deserialize, Serialize};

use super::{MedicineRecord, SymptomRecord};

/// What a query is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Symptom,
    Medicine,
    /// Neither keyword set scored above the intent threshold
    Ambiguous,
}

/// The best record found for a query, with its similarity score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult<R> {
    /// The matched record
    pub record: R,
    /// Highest score observed during the matching pass (0 - 100)
    pub score: u8,
}

/// Message shown when the query cannot be routed to either catalog.
pub const CLARIFICATION_MESSAGE: &str = "I'm not sure if you're asking about a medicine or a symptom. Please clarify or try rephrasing your question.";

/// Message shown when no medicine scores above the match threshold.
pub const MEDICINE_NOT_FOUND: &str = "Sorry, I couldn't find information about that medicine.";

/// Message shown when no symptom scores above the match threshold.
pub const SYMPTOM_NOT_FOUND: &str = "Sorry, I couldn't find information about that symptom.";

impl MatchResult<MedicineRecord> {
    /// Render as a two-field reply.
    pub fn render(&self) -> String {
        format!(
            "**Medicine**: {}\n\n**Uses**: {}",
            self.record.name, self.record.uses
        )
    }
}

impl MatchResult<SymptomRecord> {
    /// Render as a two-field reply with remedies joined by ", ".
    pub fn render(&self) -> String {
        format!(
            "**Symptom**: {}\n\n**Remedies**: {}",
            self.record.symptom,
            self.record.remedies.join(", ")
        )
    }
}
