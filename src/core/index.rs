use std::collections::HashMap;

use super::model::{AnalysisDocument, ClassRecord, Method, Service};

/// Id-keyed views over the records of an [`AnalysisDocument`].
///
/// Tables borrow from the document, so building them copies no records.
/// A duplicated id resolves to the last record carrying it.
#[derive(Debug, Default)]
pub struct LookupTables<'a> {
    methods: HashMap<&'a str, &'a Method>,
    classes: HashMap<&'a str, &'a ClassRecord>,
    services: HashMap<&'a str, &'a Service>,
}

impl<'a> LookupTables<'a> {
    pub fn build(document: &'a AnalysisDocument) -> Self {
        let methods = document
            .methods
            .iter()
            .map(|method| (method.id.as_str(), method))
            .collect();
        let classes = document
            .classes
            .iter()
            .map(|class| (class.id.as_str(), class))
            .collect();
        let services = document
            .services
            .iter()
            .map(|service| (service.id.as_str(), service))
            .collect();

        Self {
            methods,
            classes,
            services,
        }
    }

    pub fn method(&self, id: &str) -> Option<&'a Method> {
        self.methods.get(id).copied()
    }

    pub fn class(&self, id: &str) -> Option<&'a ClassRecord> {
        self.classes.get(id).copied()
    }

    pub fn service(&self, id: &str) -> Option<&'a Service> {
        self.services.get(id).copied()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}
