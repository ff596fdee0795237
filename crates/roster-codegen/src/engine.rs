use std::path::PathBuf;
use std::time::Instant;

use roster_core::Record;
use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::loader::{RecordLoader, YamlLoader};
use crate::model::{GenerateOptions, GenerationOutcome};
use crate::output::write_source_atomic;
use crate::sanitize::sanitize_record;
use crate::schema::reflect;
use crate::template::synthesize;

/// Entry point for compiling data files into literal collections.
#[derive(Debug, Clone)]
pub struct GenerationEngine<L = YamlLoader> {
    loader: L,
    out_dir: PathBuf,
}

impl GenerationEngine<YamlLoader> {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            loader: YamlLoader::new(options.data_dir),
            out_dir: options.out_dir,
        }
    }
}

impl<L: RecordLoader> GenerationEngine<L> {
    pub fn with_loader(loader: L, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            loader,
            out_dir: out_dir.into(),
        }
    }

    pub fn output_path(&self, collection: &str) -> PathBuf {
        self.out_dir.join(format!("{collection}_data.rs"))
    }

    /// Compile `collection` into a source file declaring its records.
    ///
    /// Every stage must succeed before anything is written; the target file
    /// is replaced atomically.
    pub fn generate<R: Record>(
        &self,
        collection: &str,
    ) -> Result<GenerationOutcome, GenerationError> {
        let start = Instant::now();
        info!(event = "generation_started", kind = R::KIND, collection = %collection);

        let mut records: Vec<R> = self.loader.load(collection)?;
        info!(
            event = "records_loaded",
            kind = R::KIND,
            path = %self.loader.source_path(collection).display(),
            count = records.len()
        );

        let descriptor = reflect::<R>()?;
        debug!(event = "schema_reflected", kind = R::KIND, fields = descriptor.len());

        for (index, record) in records.iter_mut().enumerate() {
            sanitize_record(record);
            debug!(event = "record_sanitized", kind = R::KIND, index = index);
        }

        let template = synthesize(collection, &descriptor, R::TYPE_INFO);
        let source = template.render(&records)?;
        debug!(event = "source_rendered", kind = R::KIND, bytes = source.len());

        let output_path = self.output_path(collection);
        let bytes_written =
            write_source_atomic(&output_path, source.as_bytes()).map_err(|source| {
                GenerationError::Write {
                    kind: R::KIND,
                    path: output_path.clone(),
                    source,
                }
            })?;
        info!(event = "source_written", kind = R::KIND, path = %output_path.display());

        let duration_ms = start.elapsed().as_millis();
        info!(
            event = "generation_finished",
            kind = R::KIND,
            records = records.len(),
            duration_ms = duration_ms
        );

        Ok(GenerationOutcome {
            kind: R::KIND.to_string(),
            collection: collection.to_string(),
            records: records.len(),
            output_path,
            bytes_written,
        })
    }
}
