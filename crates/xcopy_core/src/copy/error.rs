use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CopyError>;

/// Errors produced while classifying and copying values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
	/// Source shape cannot be copied into destination shape.
	#[error("cannot copy {src} to {dst}")]
	ShapeMismatch {
		/// Source shape label.
		src: String,
		/// Destination shape label.
		dst: String,
	},
	/// Conversion collaborator had no conversion for a scalar or mapping key.
	#[error("could not convert between {from} and {to}")]
	Conversion {
		/// Source scalar kind or type.
		from: String,
		/// Target scalar kind or type.
		to: String,
	},
	/// Value has no shape the engine can handle.
	#[error("unsupported shape: {type_name}")]
	UnsupportedShape {
		/// Host type name of the offending value.
		type_name: String,
	},
	/// Field-addressed write on a terminal shape.
	#[error("cannot set field '{field}' on {shape}")]
	Unwritable {
		/// Field designator that was requested.
		field: String,
		/// Destination shape label.
		shape: String,
	},
	/// Sequence designator is not a non-negative decimal index.
	#[error("invalid sequence index '{designator}'")]
	InvalidIndex {
		/// Offending designator.
		designator: String,
	},
	/// Sequence index is past the configured growth limit.
	#[error("sequence index '{designator}' exceeds limit (max={max_index})")]
	IndexTooLarge {
		/// Offending designator.
		designator: String,
		/// Configured index ceiling.
		max_index: usize,
	},
	/// Nesting depth exceeded configured limit.
	#[error("copy depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
}

impl CopyError {
	pub(crate) fn conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self::Conversion {
			from: from.into(),
			to: to.into(),
		}
	}

	/// Whether the error reports a misconfigured host type rather than incompatible data.
	pub fn is_fatal(&self) -> bool {
		matches!(self, Self::UnsupportedShape { .. })
	}
}
