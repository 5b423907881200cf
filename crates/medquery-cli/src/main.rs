//! Line-oriented front end: one query per line on stdin, one reply on stdout.
//!
//! Usage: `medquery [MEDICAL_DATA_JSON] [COMPOUND_PHRASES_JSON] [CONFIG_JSON]`

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use medquery_core::{load_responder, MatchConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_MEDICAL_DATA: &str = "data/medical_data.json";
const DEFAULT_COMPOUND_PHRASES: &str = "data/compound_phrases.json";
const DEFAULT_LOG_FILTER: &str = "medquery=info,medquery_core=info";

const WELCOME: &str = "Medical Information Chatbot\n\
Ask about medicines or symptoms (e.g. 'Tell me about aspirin' or 'What are remedies for a headache?').\n\
Useful words: symptom, pain, condition, remedy, illness, medicine, medication, drug, treatment, prescription.";

const DISCLAIMER: &str = "Note: this chatbot provides general information only. \
It is not a substitute for professional medical advice.";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let data_path = args.next().unwrap_or_else(|| DEFAULT_MEDICAL_DATA.to_string());
    let phrases_path = args
        .next()
        .unwrap_or_else(|| DEFAULT_COMPOUND_PHRASES.to_string());
    let config = match args.next() {
        Some(path) => MatchConfig::from_json_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => MatchConfig::default(),
    };

    let responder = load_responder(&data_path, &phrases_path, config).with_context(|| {
        format!(
            "Failed to load reference data from {} and {}",
            data_path, phrases_path
        )
    })?;
    tracing::info!(
        medicines = responder.catalog().medicines().len(),
        symptoms = responder.catalog().symptoms().len(),
        match_threshold = responder.config().match_threshold,
        intent_threshold = responder.config().intent_threshold,
        "MedQuery ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}\n\n{}\n", WELCOME, DISCLAIMER)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read query from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}\n", responder.respond(&line))?;
        out.flush()?;
    }

    Ok(())
}
