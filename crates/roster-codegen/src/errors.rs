use std::fmt;
use std::path::PathBuf;

use roster_core::FieldShape;
use thiserror::Error;

/// Pipeline stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Reflect,
    Render,
    Persist,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Load => "load",
            Stage::Reflect => "reflect",
            Stage::Render => "render",
            Stage::Persist => "persist",
        };
        f.write_str(name)
    }
}

/// Why a data file could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors emitted by the generation engine. All of them abort the run.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{kind}: failed to load {}: {source}", .path.display())]
    Load {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: LoadFailure,
    },
    #[error("{kind}: field `{field}` has unsupported shape {shape}")]
    UnsupportedFieldKind {
        kind: &'static str,
        field: String,
        shape: FieldShape,
    },
    #[error("{kind}: field name `{field}` is not a Rust identifier")]
    InvalidFieldName { kind: &'static str, field: String },
    #[error("{kind}: field `{field}` is declared more than once")]
    DuplicateField { kind: &'static str, field: String },
    #[error("{kind}: render failed: {reason}")]
    Render { kind: &'static str, reason: String },
    #[error("{kind}: failed to write {}: {source}", .path.display())]
    Write {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerationError {
    pub fn stage(&self) -> Stage {
        match self {
            GenerationError::Load { .. } => Stage::Load,
            GenerationError::UnsupportedFieldKind { .. }
            | GenerationError::InvalidFieldName { .. }
            | GenerationError::DuplicateField { .. } => Stage::Reflect,
            GenerationError::Render { .. } => Stage::Render,
            GenerationError::Write { .. } => Stage::Persist,
        }
    }

    /// Record kind whose generation failed.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::Load { kind, .. }
            | GenerationError::UnsupportedFieldKind { kind, .. }
            | GenerationError::InvalidFieldName { kind, .. }
            | GenerationError::DuplicateField { kind, .. }
            | GenerationError::Render { kind, .. }
            | GenerationError::Write { kind, .. } => *kind,
        }
    }
}
