pub mod console;
pub mod cypher;

pub use console::ConsoleFormatter;
pub use cypher::CypherFormatter;
