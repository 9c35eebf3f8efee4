//! # callscope
//!
//! Viewer for precomputed call-chain analysis results.
//!
//! callscope reads the JSON document produced by a call-chain analyzer
//! (services, classes, methods, method calls and derived call chains) and
//! renders it without performing any analysis of its own.
//!
//! ## Outputs
//!
//! - **Console report**: summary of every chain followed by per-chain detail
//! - **Cypher script**: Neo4j import script with node and `CALLS` relationship statements

pub mod core;
pub mod formatters;
