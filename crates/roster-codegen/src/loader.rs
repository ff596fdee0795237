use std::path::PathBuf;

use roster_core::Record;
use tracing::debug;

use crate::errors::{GenerationError, LoadFailure};

/// Source of raw records for a collection.
pub trait RecordLoader {
    /// Where records for `collection` are read from, for diagnostics.
    fn source_path(&self, collection: &str) -> PathBuf;

    /// Load every record of `collection`, in source order.
    fn load<R: Record>(&self, collection: &str) -> Result<Vec<R>, GenerationError>;
}

/// Loads `<data_dir>/<collection>.yaml`, a top-level sequence of mappings.
#[derive(Debug, Clone)]
pub struct YamlLoader {
    data_dir: PathBuf,
}

impl YamlLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl RecordLoader for YamlLoader {
    fn source_path(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.yaml"))
    }

    fn load<R: Record>(&self, collection: &str) -> Result<Vec<R>, GenerationError> {
        let path = self.source_path(collection);
        let fail = |source: LoadFailure| GenerationError::Load {
            kind: R::KIND,
            path: path.clone(),
            source,
        };

        let content = std::fs::read_to_string(&path).map_err(|err| fail(err.into()))?;
        debug!(event = "data_read", path = %path.display(), bytes = content.len());

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yaml::from_str(&content).map_err(|err| fail(err.into()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use roster_core::list_values;
    use roster_model::Team;

    use super::*;

    #[test]
    fn loads_records_in_file_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("teams.yaml"),
            "- name: b\n  internal_slack_channel: '#b'\n  members: [x]\n\
             - name: a\n  internal_slack_channel: '#a'\n  members: []\n",
        )
        .expect("write data");

        let teams: Vec<Team> = YamlLoader::new(dir.path()).load("teams").expect("load");
        let names: Vec<&str> = teams.iter().map(|team| team.name.as_ref()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(list_values(&teams[0].members), vec!["x"]);
    }

    #[test]
    fn blank_and_empty_documents_have_no_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("blank.yaml"), "\n  \n").expect("write data");
        fs::write(dir.path().join("empty.yaml"), "[]\n").expect("write data");

        let loader = YamlLoader::new(dir.path());
        assert!(loader.load::<Team>("blank").expect("load blank").is_empty());
        assert!(loader.load::<Team>("empty").expect("load empty").is_empty());
    }

    #[test]
    fn missing_file_is_a_load_error_with_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = YamlLoader::new(dir.path())
            .load::<Team>("teams")
            .expect_err("missing file");
        match err {
            GenerationError::Load { kind, path, source } => {
                assert_eq!(kind, "team");
                assert_eq!(path, dir.path().join("teams.yaml"));
                assert!(matches!(source, LoadFailure::Io(_)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_structure_is_a_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("teams.yaml"), "name: not-a-list\n").expect("write data");
        let err = YamlLoader::new(dir.path())
            .load::<Team>("teams")
            .expect_err("mapping instead of sequence");
        assert!(matches!(
            err,
            GenerationError::Load {
                source: LoadFailure::Yaml(_),
                ..
            }
        ));
    }
}
