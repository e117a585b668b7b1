use std::path::PathBuf;

use xcopy::copy::{Reflect, ValueRef};

use crate::cmd::util::{emit_json, read_json};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth", default_value_t = 32)]
	pub max_depth: u32,
}

/// Print the shape classification tree of a JSON document.
pub fn run(args: Args) -> Result<()> {
	let Args { file, json, max_depth } = args;

	let doc = read_json(&file)?;
	let root = shape_tree(&doc, None, 0, max_depth)?;

	if json {
		return emit_json(&ShapeJson {
			path: file.display().to_string(),
			root,
		});
	}

	println!("path: {}", file.display());
	print_node(&root, 0);
	Ok(())
}

/// Classify `value` and its children down to `max_depth`.
pub(crate) fn shape_tree(value: &dyn Reflect, field: Option<String>, depth: u32, max_depth: u32) -> xcopy::copy::Result<ShapeNode> {
	let view = value.reflect()?;
	let mut node = ShapeNode {
		field,
		shape: view.shape().name(),
		kind: None,
		len: None,
		truncated: false,
		children: Vec::new(),
	};

	let children: Vec<(String, &dyn Reflect)> = match view {
		ValueRef::Record(record) => record.fields().into_iter().map(|item| (item.name.to_owned(), item.value)).collect(),
		ValueRef::Sequence(seq) => (0..seq.len())
			.filter_map(|idx| seq.element(idx).map(|item| (idx.to_string(), item)))
			.collect(),
		ValueRef::Mapping(map) => map.entries().into_iter().map(|(key, item)| (key.to_string(), item)).collect(),
		ValueRef::Scalar(scalar) => {
			node.kind = Some(scalar.kind().name());
			Vec::new()
		}
		ValueRef::Open(open) => {
			node.kind = Some(open.held().kind_name());
			Vec::new()
		}
	};

	if view.has_fields() {
		node.len = Some(children.len());
	}
	if children.is_empty() {
		return Ok(node);
	}
	if depth >= max_depth {
		node.truncated = true;
		return Ok(node);
	}

	for (name, child) in children {
		node.children.push(shape_tree(child, Some(name), depth + 1, max_depth)?);
	}
	Ok(node)
}

fn print_node(node: &ShapeNode, indent: usize) {
	let pad = " ".repeat(indent * 2);
	let label = node.field.as_deref().unwrap_or("(root)");
	let mut line = format!("{pad}{label}: {}", node.shape);
	if let Some(kind) = node.kind {
		line.push(' ');
		line.push_str(kind);
	}
	if let Some(len) = node.len {
		line.push_str(&format!("[{len}]"));
	}
	if node.truncated {
		line.push_str(" ...");
	}
	println!("{line}");

	for child in &node.children {
		print_node(child, indent + 1);
	}
}

#[derive(serde::Serialize)]
struct ShapeJson {
	path: String,
	root: ShapeNode,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct ShapeNode {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) field: Option<String>,
	pub(crate) shape: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) kind: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) len: Option<usize>,
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub(crate) truncated: bool,
	pub(crate) children: Vec<ShapeNode>,
}
