use std::path::Path;

use crate::error::{CliError, Result};

/// Read and parse a JSON document.
pub(crate) fn read_json(path: &Path) -> Result<serde_json::Value> {
	let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::from_str(&text).map_err(|source| CliError::Json {
		path: path.to_path_buf(),
		source,
	})
}

/// Write `value` as pretty JSON to `path`.
pub(crate) fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
	let mut text = render_json(value)?;
	text.push('\n');
	std::fs::write(path, text).map_err(|source| CliError::Io {
		path: path.to_path_buf(),
		source,
	})
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	println!("{}", render_json(value)?);
	Ok(())
}

fn render_json<T: serde::Serialize>(value: &T) -> Result<String> {
	serde_json::to_string_pretty(value).map_err(CliError::Render)
}
