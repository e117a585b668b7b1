use std::path::PathBuf;

use thiserror::Error;
use xcopy::copy::CopyError;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by `xcopy` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	#[error("failed to access {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid json in {path}: {source}")]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("failed to serialize output: {0}")]
	Render(#[source] serde_json::Error),
	#[error(transparent)]
	Copy(#[from] CopyError),
}
