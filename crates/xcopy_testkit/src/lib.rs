//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read and parse a JSON fixture, panicking with the fixture name on failure.
pub fn fixture_json(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} should be readable: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("fixture {} should be valid json: {err}", path.display()))
}

/// Fresh path for a test output file under `<target>/xcopy-scratch`, unique per process.
///
/// Any file left there by an earlier run under the same name is removed.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("xcopy-scratch");
	std::fs::create_dir_all(&dir).unwrap_or_else(|err| panic!("scratch dir {} should be creatable: {err}", dir.display()));
	let path = dir.join(format!("{}-{name}", std::process::id()));
	let _ = std::fs::remove_file(&path);
	path
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}
