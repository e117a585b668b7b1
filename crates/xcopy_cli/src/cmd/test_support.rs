use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use xcopy_testkit::{fixture_path, target_dir};

static XCOPY_BIN: OnceLock<PathBuf> = OnceLock::new();

/// Fixture path as a command-line argument.
pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

/// Run `xcopy` with logging pinned to `warn` so stderr only carries the error line.
pub(crate) fn run_xcopy(args: &[&str]) -> Output {
	Command::new(xcopy_bin())
		.args(args)
		.env("XCOPY_LOG", "warn")
		.output()
		.expect("xcopy command executes")
}

pub(crate) fn run_xcopy_json(args: &[&str]) -> serde_json::Value {
	let output = run_xcopy(args);
	assert!(
		output.status.success(),
		"xcopy {args:?} failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

/// Run a command expected to fail and return its stderr.
pub(crate) fn run_xcopy_failure(args: &[&str]) -> String {
	let output = run_xcopy(args);
	assert!(!output.status.success(), "xcopy {args:?} should fail");
	String::from_utf8_lossy(&output.stderr).into_owned()
}

/// `xcopy copy <source> <dest> [extra...]` over two fixtures, parsed as JSON.
pub(crate) fn copy_fixtures(source: &str, dest: &str, extra: &[&str]) -> serde_json::Value {
	let source = fixture_arg(source);
	let dest = fixture_arg(dest);
	let mut args = vec!["copy", source.as_str(), dest.as_str()];
	args.extend_from_slice(extra);
	run_xcopy_json(&args)
}

fn xcopy_bin() -> &'static PathBuf {
	XCOPY_BIN.get_or_init(|| {
		if let Some(path) = std::env::var_os("CARGO_BIN_EXE_xcopy") {
			return PathBuf::from(path);
		}

		let status = Command::new("cargo")
			.current_dir(env!("CARGO_MANIFEST_DIR"))
			.args(["build", "--quiet", "--bin", "xcopy"])
			.status()
			.expect("cargo build executes");
		let bin = target_dir().join("debug").join(format!("xcopy{}", std::env::consts::EXE_SUFFIX));
		assert!(status.success(), "failed to build xcopy binary at {}", bin.display());
		bin
	})
}
