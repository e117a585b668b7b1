use std::path::PathBuf;

use tracing::debug;
use xcopy::copy::{Converter, CopyOptions, Copier, IdentityConverter, StandardConverter, shape_of};

use crate::cmd::util::{emit_json, read_json, write_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub source: PathBuf,
	pub dest: PathBuf,
	#[arg(long)]
	pub out: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[arg(long)]
	pub strict: bool,
	#[arg(long = "no-coerce")]
	pub no_coerce: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "max-index")]
	pub max_index: Option<usize>,
}

/// Copy one JSON document into another and print or write the result.
pub fn run(args: Args) -> Result<()> {
	let Args {
		source,
		dest,
		out,
		json,
		strict,
		no_coerce,
		max_depth,
		max_index,
	} = args;

	let src_doc = read_json(&source)?;
	let mut doc = read_json(&dest)?;

	let mut options = if strict { CopyOptions::strict() } else { CopyOptions::default() };
	if let Some(max_depth) = max_depth {
		options.max_depth = max_depth;
	}
	if let Some(max_index) = max_index {
		options.max_index = max_index;
	}

	let converter: &dyn Converter = if no_coerce { &IdentityConverter } else { &StandardConverter };
	debug!(source = %source.display(), dest = %dest.display(), ?options, no_coerce, "copying document");
	Copier::new(converter, options).copy(&src_doc, &mut doc)?;

	if let Some(out) = &out {
		write_json(out, &doc)?;
	}

	if json {
		let report = CopyReport {
			source: source.display().to_string(),
			dest: dest.display().to_string(),
			out: out.as_ref().map(|path| path.display().to_string()),
			shape: shape_of(&doc)?.name(),
			result: doc,
		};
		return emit_json(&report);
	}

	match out {
		Some(out) => println!("wrote: {}", out.display()),
		None => emit_json(&doc)?,
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct CopyReport {
	source: String,
	dest: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	out: Option<String>,
	shape: &'static str,
	result: serde_json::Value,
}

#[cfg(test)]
mod tests;
