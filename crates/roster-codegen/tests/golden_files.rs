use std::fs;
use std::path::PathBuf;

use roster_codegen::{GenerateOptions, GenerationEngine};
use roster_model::{Person, Team};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn checked_in(collection: &str) -> String {
    let path = workspace_root()
        .join("crates/roster-server/src/generated")
        .join(format!("{collection}_data.rs"));
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("missing source at {}", path.display()))
}

#[test]
fn checked_in_sources_match_data_files() {
    let out_dir = tempfile::tempdir().expect("tempdir");
    let engine = GenerationEngine::new(GenerateOptions {
        data_dir: workspace_root().join("data"),
        out_dir: out_dir.path().to_path_buf(),
    });

    let people = engine.generate::<Person>("people").expect("generate people");
    let teams = engine.generate::<Team>("teams").expect("generate teams");

    assert_eq!(
        fs::read_to_string(people.output_path).expect("read people"),
        checked_in("people"),
        "people_data.rs is stale; run `cargo run -p roster-cli`"
    );
    assert_eq!(
        fs::read_to_string(teams.output_path).expect("read teams"),
        checked_in("teams"),
        "teams_data.rs is stale; run `cargo run -p roster-cli`"
    );
}
