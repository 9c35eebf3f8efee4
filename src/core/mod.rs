pub mod index;
pub mod loader;
pub mod model;

pub use index::LookupTables;
pub use loader::{load_analysis, parse_analysis};
pub use model::{
    AnalysisDocument, AnalysisMetadata, CallChain, CallType, ChainNode, ClassRecord, ClassType,
    Method, MethodCall, Service,
};
