//! Console report formatter.
//!
//! Renders a loaded analysis result as plain text for a terminal:
//!
//! - **Overview**: project metadata and record counts
//! - **Summary**: one numbered entry per call chain, in input order
//! - **Detail**: entry point, indented call path and statistics per chain
//!
//! Records that a chain references but the document does not contain are
//! skipped line by line; the surrounding report is always complete.

use crate::core::{AnalysisDocument, CallChain, ChainNode, LookupTables};

const RULE_WIDTH: usize = 80;
const MISSING: &str = "N/A";
/// Deeper nodes keep this indent; the `[Level n]` label still shows the real depth.
const MAX_INDENT_LEVEL: usize = 64;

/// Formatter for the human-readable call chain report.
pub struct ConsoleFormatter {
    /// Whether the report opens with project metadata and record counts
    show_overview: bool,
}

impl ConsoleFormatter {
    pub fn new() -> Self {
        Self {
            show_overview: true,
        }
    }

    pub fn with_overview(mut self, show: bool) -> Self {
        self.show_overview = show;
        self
    }

    /// Full report: overview, summary, then the detail of every chain.
    pub fn format_report(&self, document: &AnalysisDocument, tables: &LookupTables) -> String {
        let mut output = String::with_capacity(4096);

        if self.show_overview {
            output.push_str(&self.format_overview(document));
        }
        output.push_str(&self.format_summary(document, tables));
        for chain in &document.call_chains {
            output.push_str(&self.format_chain_detail(chain, tables));
        }

        output
    }

    pub fn format_overview(&self, document: &AnalysisDocument) -> String {
        let mut output = String::new();

        if let Some(metadata) = &document.metadata {
            if !metadata.project_name.is_empty() {
                output.push_str(&format!("Project: {}\n", metadata.project_name));
            }
            if !metadata.analysis_time.is_empty() {
                output.push_str(&format!("Analysis time: {}\n", metadata.analysis_time));
            }
        }

        output.push_str(&format!(
            "Services: {} | Classes: {} | Methods: {} | Method calls: {} | Call chains: {}\n",
            document.services.len(),
            document.classes.len(),
            document.methods.len(),
            document.method_calls.len(),
            document.call_chains.len()
        ));

        output
    }

    pub fn format_summary(&self, document: &AnalysisDocument, tables: &LookupTables) -> String {
        let mut output = String::new();
        push_banner(&mut output, "Call chain summary");

        for (position, chain) in document.call_chains.iter().enumerate() {
            let entry = chain.entry_point.as_ref();
            let endpoint = entry.and_then(ChainNode::endpoint).unwrap_or(MISSING);
            output.push_str(&format!("\n{}. {}\n", position + 1, endpoint));

            if let Some(entry) = entry {
                if let (Some(method), Some(class)) =
                    (tables.method(&entry.method_id), tables.class(&entry.class_id))
                {
                    output.push_str(&format!(
                        "   → {}.{}()\n",
                        class.class_name, method.method_name
                    ));
                }
            }

            output.push_str(&format!(
                "   Depth: {} | Cross-service: {}\n",
                chain.max_depth,
                if chain.cross_service { "✓" } else { "✗" }
            ));
        }

        output
    }

    pub fn format_chain_detail(&self, chain: &CallChain, tables: &LookupTables) -> String {
        let mut output = String::new();
        push_banner(&mut output, &format!("Call chain ID: {}", chain.id));

        if let Some(entry) = &chain.entry_point {
            self.format_entry_point(&mut output, entry, tables);
        }
        self.format_call_path(&mut output, chain, tables);
        self.format_statistics(&mut output, chain);

        output
    }

    fn format_entry_point(&self, output: &mut String, entry: &ChainNode, tables: &LookupTables) {
        output.push_str("\n📍 Entry point:\n");
        output.push_str(&format!(
            "   HTTP: {}\n",
            entry.endpoint().unwrap_or(MISSING)
        ));

        let method = tables.method(&entry.method_id);
        let class = tables.class(&entry.class_id);
        let service = tables.service(&entry.service_id);

        match (method, class, service) {
            (Some(method), Some(class), Some(service)) => {
                output.push_str(&format!(
                    "   Method: {}.{}()\n",
                    class.qualified_name, method.method_name
                ));
                output.push_str(&format!(
                    "   Service: {} ({})\n",
                    service.name, service.artifact_id
                ));
            }
            _ => {
                tracing::debug!(
                    method_id = %entry.method_id,
                    class_id = %entry.class_id,
                    service_id = %entry.service_id,
                    "Entry point references unknown records"
                );
            }
        }
    }

    fn format_call_path(&self, output: &mut String, chain: &CallChain, tables: &LookupTables) {
        output.push_str("\n🔗 Call path:\n");

        let last = chain.chain.len().saturating_sub(1);
        for (position, node) in chain.chain.iter().enumerate() {
            let (Some(method), Some(class)) =
                (tables.method(&node.method_id), tables.class(&node.class_id))
            else {
                tracing::debug!(
                    chain_id = %chain.id,
                    level = node.level,
                    method_id = %node.method_id,
                    class_id = %node.class_id,
                    "Skipping call path node with unknown records"
                );
                continue;
            };

            let indent = "  ".repeat(node.level.min(MAX_INDENT_LEVEL) + 1);
            let connector = if position == last { "└─" } else { "├─" };

            output.push_str(&format!(
                "{}{} [Level {}] {}.{}()\n",
                indent, connector, node.level, class.class_name, method.method_name
            ));

            if let Some(endpoint) = node.endpoint() {
                output.push_str(&format!("{}   HTTP: {}\n", indent, endpoint));
            }
            if let Some(call_type) = &node.call_type {
                output.push_str(&format!("{}   Type: {}\n", indent, call_type));
            }
        }
    }

    fn format_statistics(&self, output: &mut String, chain: &CallChain) {
        output.push_str("\n📊 Statistics:\n");
        output.push_str(&format!("   Max depth: {}\n", chain.max_depth));
        output.push_str(&format!(
            "   Services involved: {}\n",
            chain.involved_services.len()
        ));
        output.push_str(&format!(
            "   Cross-service: {}\n",
            if chain.cross_service { "yes" } else { "no" }
        ));
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn push_banner(output: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_wraps_title_in_rules() {
        let mut out = String::new();
        push_banner(&mut out, "T");
        let rule = "=".repeat(80);
        assert_eq!(out, format!("\n{rule}\nT\n{rule}\n"));
    }
}
