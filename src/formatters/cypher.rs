use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::{AnalysisDocument, ClassRecord, Method, MethodCall, Service};

/// Number of id characters used for generated node variables.
const SHORT_ID_LEN: usize = 8;

/// Neo4j Cypher import script formatter.
///
/// Output sections are emitted in a fixed order (services, classes, methods,
/// call relationships) so that every `MATCH` finds nodes created earlier in
/// the same script.
pub struct CypherFormatter;

impl CypherFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, document: &AnalysisDocument, output_path: &Path) -> Result<()> {
        let script = self.format_document(document);
        fs::write(output_path, script)
            .with_context(|| format!("Failed to write Cypher script {}", output_path.display()))?;

        tracing::info!(
            path = %output_path.display(),
            statements = self.statement_count(document),
            "Exported Cypher script"
        );
        Ok(())
    }

    pub fn format_document(&self, document: &AnalysisDocument) -> String {
        let mut output = String::with_capacity(8192);

        output.push_str("// Neo4j Cypher import script\n");
        output.push_str("// Generated by callscope\n\n");

        output.push_str("// 1. Create service nodes\n");
        for service in &document.services {
            self.format_service(&mut output, service);
        }

        output.push_str("// 2. Create class nodes\n");
        for class in &document.classes {
            self.format_class(&mut output, class);
        }

        output.push_str("// 3. Create method nodes\n");
        for method in &document.methods {
            self.format_method(&mut output, method);
        }

        output.push_str("// 4. Create method call relationships\n");
        for call in &document.method_calls {
            self.format_call(&mut output, call);
        }

        output
    }

    /// Number of `CREATE` statements [`format_document`](Self::format_document) emits.
    pub fn statement_count(&self, document: &AnalysisDocument) -> usize {
        document.services.len()
            + document.classes.len()
            + document.methods.len()
            + document.resolved_call_count()
    }

    fn format_service(&self, output: &mut String, service: &Service) {
        output.push_str(&format!(
            "CREATE (s_{}:Service {{\n",
            short_id(&service.id)
        ));
        output.push_str(&format!("  id: {},\n", quote(&service.id)));
        output.push_str(&format!("  name: {},\n", quote(&service.name)));
        output.push_str(&format!("  artifactId: {}\n", quote(&service.artifact_id)));
        output.push_str("});\n\n");
    }

    fn format_class(&self, output: &mut String, class: &ClassRecord) {
        output.push_str(&format!("CREATE (c_{}:Class {{\n", short_id(&class.id)));
        output.push_str(&format!("  id: {},\n", quote(&class.id)));
        output.push_str(&format!("  name: {},\n", quote(&class.class_name)));
        output.push_str(&format!(
            "  qualifiedName: {},\n",
            quote(&class.qualified_name)
        ));
        output.push_str(&format!("  type: {}\n", quote(class.class_type.as_str())));
        output.push_str("});\n\n");
    }

    fn format_method(&self, output: &mut String, method: &Method) {
        output.push_str(&format!("CREATE (m_{}:Method {{\n", short_id(&method.id)));
        output.push_str(&format!("  id: {},\n", quote(&method.id)));
        output.push_str(&format!("  name: {},\n", quote(&method.method_name)));
        output.push_str(&format!("  signature: {}\n", quote(&method.signature)));
        output.push_str("});\n\n");
    }

    fn format_call(&self, output: &mut String, call: &MethodCall) {
        // Calls into unanalyzed code have no node to attach to.
        let Some(target) = call.resolved_target() else {
            return;
        };

        output.push_str(&format!(
            "MATCH (m1:Method {{id: {}}})\n",
            quote(&call.source_method_id)
        ));
        output.push_str(&format!("MATCH (m2:Method {{id: {}}})\n", quote(target)));
        output.push_str("CREATE (m1)-[:CALLS {\n");
        output.push_str(&format!("  callType: {},\n", quote(call.call_type.as_str())));
        output.push_str(&format!("  crossService: {}\n", call.cross_service));
        output.push_str("}]->(m2);\n\n");
    }
}

impl Default for CypherFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading characters of an id, used to name the node variable.
fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Single-quoted Cypher string literal.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_takes_leading_characters() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
        assert_eq!(short_id("ééééééééé"), "éééééééé");
    }

    #[test]
    fn quote_escapes_quotes_and_backslashes() {
        assert_eq!(quote("plain"), "'plain'");
        assert_eq!(quote("O'Brien"), "'O\\'Brien'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
    }
}
