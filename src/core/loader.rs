use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::model::AnalysisDocument;

/// Reads an analysis result file produced by the call-chain analyzer.
pub fn load_analysis(path: &Path) -> Result<AnalysisDocument> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read analysis file {}", path.display()))?;
    let document = parse_analysis(&content)
        .with_context(|| format!("Failed to parse analysis file {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        services = document.services.len(),
        classes = document.classes.len(),
        methods = document.methods.len(),
        method_calls = document.method_calls.len(),
        call_chains = document.call_chains.len(),
        "Loaded analysis result"
    );

    Ok(document)
}

pub fn parse_analysis(content: &str) -> Result<AnalysisDocument> {
    Ok(serde_json::from_str(content)?)
}
