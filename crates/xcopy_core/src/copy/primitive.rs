use std::fmt;

/// Scalar categories understood by the conversion collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
	/// Boolean.
	Bool,
	/// Signed integer.
	Int,
	/// Unsigned integer.
	Uint,
	/// Floating point.
	Float,
	/// UTF-8 string.
	Str,
}

impl ScalarKind {
	/// Lowercase label used in error messages.
	pub fn name(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Uint => "uint",
			Self::Float => "float",
			Self::Str => "string",
		}
	}
}

impl fmt::Display for ScalarKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Scalar value moved between slots.
///
/// Stored inside a host type, a `Primitive` is an open slot: it takes whatever scalar is copied
/// into it without conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Primitive {
	/// Absent value.
	#[default]
	Nil,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int(i64),
	/// Unsigned integer scalar.
	Uint(u64),
	/// Floating point scalar.
	Float(f64),
	/// String scalar.
	Str(String),
}

impl Primitive {
	/// Zero value of `kind`.
	pub fn zero(kind: ScalarKind) -> Self {
		match kind {
			ScalarKind::Bool => Self::Bool(false),
			ScalarKind::Int => Self::Int(0),
			ScalarKind::Uint => Self::Uint(0),
			ScalarKind::Float => Self::Float(0.0),
			ScalarKind::Str => Self::Str(String::new()),
		}
	}

	/// Scalar kind, or `None` for [`Primitive::Nil`].
	pub fn kind(&self) -> Option<ScalarKind> {
		match self {
			Self::Nil => None,
			Self::Bool(_) => Some(ScalarKind::Bool),
			Self::Int(_) => Some(ScalarKind::Int),
			Self::Uint(_) => Some(ScalarKind::Uint),
			Self::Float(_) => Some(ScalarKind::Float),
			Self::Str(_) => Some(ScalarKind::Str),
		}
	}

	/// Kind label, `nil` for [`Primitive::Nil`].
	pub fn kind_name(&self) -> &'static str {
		self.kind().map_or("nil", ScalarKind::name)
	}

	/// Whether this is [`Primitive::Nil`].
	pub fn is_nil(&self) -> bool {
		matches!(self, Self::Nil)
	}

	/// Borrow the string payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(text) => Some(text),
			_ => None,
		}
	}
}

impl fmt::Display for Primitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Nil => f.write_str("nil"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::Int(v) => write!(f, "{v}"),
			Self::Uint(v) => write!(f, "{v}"),
			Self::Float(v) => write!(f, "{v}"),
			Self::Str(v) => f.write_str(v),
		}
	}
}

impl From<bool> for Primitive {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Primitive {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<u64> for Primitive {
	fn from(value: u64) -> Self {
		Self::Uint(value)
	}
}

impl From<f64> for Primitive {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<&str> for Primitive {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for Primitive {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}
