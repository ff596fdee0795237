use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateOptions {
    /// Directory holding `<collection>.yaml` data files.
    pub data_dir: PathBuf,
    /// Directory where `<collection>_data.rs` sources are written.
    pub out_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            out_dir: PathBuf::from("crates/roster-server/src/generated"),
        }
    }
}

/// Summary of one generated collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub kind: String,
    pub collection: String,
    pub records: usize,
    pub output_path: PathBuf,
    pub bytes_written: u64,
}
