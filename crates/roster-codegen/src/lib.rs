//! Build-time compiler from YAML data files to Rust source.
//!
//! Each run loads the records of one collection, trims their text, and writes
//! a source file declaring them as a `static` slice of literals, so services
//! can serve the data without reading or parsing anything at runtime.

pub mod engine;
pub mod errors;
pub mod loader;
pub mod model;
pub mod output;
pub mod sanitize;
pub mod schema;
pub mod template;

pub use engine::GenerationEngine;
pub use errors::{GenerationError, LoadFailure, Stage};
pub use loader::{RecordLoader, YamlLoader};
pub use model::{GenerateOptions, GenerationOutcome};
pub use sanitize::sanitize_record;
pub use schema::reflect;
pub use template::{CodeTemplate, escape_literal, synthesize};
