use tracing::trace;

use crate::copy::{Copier, CopyError, FieldRef, Mapping, Open, Primitive, Record, Reflect, Result, Scalar, ScalarKind, Sequence, Shape};

/// Shared view of a value, tagged by shape. Source side of a copy step.
#[derive(Clone, Copy)]
pub enum ValueRef<'a> {
	/// Record view.
	Record(&'a dyn Record),
	/// Sequence view.
	Sequence(&'a dyn Sequence),
	/// Mapping view.
	Mapping(&'a dyn Mapping),
	/// Scalar view.
	Scalar(&'a dyn Scalar),
	/// Open slot view.
	Open(&'a dyn Open),
}

/// Mutable view of a value, tagged by shape. Destination side of a copy step.
pub enum ValueMut<'a> {
	/// Record view.
	Record(&'a mut dyn Record),
	/// Sequence view.
	Sequence(&'a mut dyn Sequence),
	/// Mapping view.
	Mapping(&'a mut dyn Mapping),
	/// Scalar view.
	Scalar(&'a mut dyn Scalar),
	/// Open slot view.
	Open(&'a mut dyn Open),
}

impl<'a> ValueRef<'a> {
	/// Shape tag.
	pub fn shape(&self) -> Shape {
		match self {
			Self::Record(_) => Shape::Record,
			Self::Sequence(_) => Shape::Sequence,
			Self::Mapping(_) => Shape::Mapping,
			Self::Scalar(_) => Shape::Scalar,
			Self::Open(_) => Shape::Open,
		}
	}

	/// Whether the viewed shape accepts field-addressed writes.
	pub fn has_fields(&self) -> bool {
		self.shape().has_fields()
	}

	/// Label used in error messages.
	pub fn name(&self) -> String {
		match self {
			Self::Record(record) => format!("Record '{}'", record.type_name()),
			Self::Scalar(scalar) => format!("Scalar '{}'", scalar.slot_type()),
			other => other.shape().name().to_owned(),
		}
	}

	/// Empty stand-in of the same shape, used for a source behind an empty optional.
	pub(crate) fn absent(&self) -> ValueRef<'static> {
		match self {
			Self::Record(_) => ValueRef::Record(&ABSENT),
			Self::Sequence(_) => ValueRef::Sequence(&ABSENT),
			Self::Mapping(_) => ValueRef::Mapping(&ABSENT),
			Self::Scalar(scalar) => ValueRef::Scalar(absent_scalar(scalar.kind())),
			Self::Open(_) => ValueRef::Open(&NIL),
		}
	}

	/// Copy this value into `dst`.
	pub(crate) fn copy_into(&self, dst: &mut ValueMut<'_>, copier: &Copier<'_>, depth: u32) -> Result<()> {
		trace!(depth, src = %self.name(), dst = %dst.name(), "copy value");

		match self {
			Self::Record(record) => {
				self.expect_fields(dst)?;
				for field in record.fields() {
					dst.set_field(field.name, field.value, copier, depth)?;
				}
				Ok(())
			}
			Self::Sequence(sequence) => {
				self.expect_fields(dst)?;
				for index in 0..sequence.len() {
					let Some(element) = sequence.element(index) else {
						break;
					};
					dst.set_field(&index.to_string(), element, copier, depth)?;
				}
				Ok(())
			}
			Self::Mapping(mapping) => {
				self.expect_fields(dst)?;
				for (key, value) in mapping.entries() {
					let designator = copier.key_to_designator(&key)?;
					dst.set_field(&designator, value, copier, depth)?;
				}
				Ok(())
			}
			Self::Scalar(scalar) => self.assign(scalar.get(), dst, copier),
			Self::Open(open) => self.assign(open.held(), dst, copier),
		}
	}

	fn expect_fields(&self, dst: &ValueMut<'_>) -> Result<()> {
		if dst.has_fields() { Ok(()) } else { Err(self.mismatch(dst)) }
	}

	fn mismatch(&self, dst: &ValueMut<'_>) -> CopyError {
		CopyError::ShapeMismatch {
			src: self.name(),
			dst: dst.name(),
		}
	}

	/// Terminal write of a scalar-like source.
	fn assign(&self, value: Primitive, dst: &mut ValueMut<'_>, copier: &Copier<'_>) -> Result<()> {
		match dst {
			ValueMut::Scalar(slot) => {
				let kind = slot.kind();
				let converted = copier
					.convert_scalar(&value, kind)
					.ok_or_else(|| CopyError::conversion(value.kind_name(), kind.name()))?;
				slot.set(converted)
					.map_err(|rejected| CopyError::conversion(rejected.kind_name(), slot.slot_type()))
			}
			ValueMut::Open(slot) => {
				slot.assign(value);
				Ok(())
			}
			_ => Err(self.mismatch(dst)),
		}
	}
}

impl<'a> ValueMut<'a> {
	/// Shape tag.
	pub fn shape(&self) -> Shape {
		match self {
			Self::Record(_) => Shape::Record,
			Self::Sequence(_) => Shape::Sequence,
			Self::Mapping(_) => Shape::Mapping,
			Self::Scalar(_) => Shape::Scalar,
			Self::Open(_) => Shape::Open,
		}
	}

	/// Whether the viewed shape accepts field-addressed writes.
	pub fn has_fields(&self) -> bool {
		self.shape().has_fields()
	}

	/// Label used in error messages.
	pub fn name(&self) -> String {
		match self {
			Self::Record(record) => format!("Record '{}'", record.type_name()),
			Self::Scalar(scalar) => format!("Scalar '{}'", scalar.slot_type()),
			other => other.shape().name().to_owned(),
		}
	}
}

/// Empty structure and nil scalar stand-in.
struct Absent {
	kind: ScalarKind,
}

static ABSENT: Absent = Absent {
	kind: ScalarKind::Str,
};
static ABSENT_BOOL: Absent = Absent {
	kind: ScalarKind::Bool,
};
static ABSENT_INT: Absent = Absent {
	kind: ScalarKind::Int,
};
static ABSENT_UINT: Absent = Absent {
	kind: ScalarKind::Uint,
};
static ABSENT_FLOAT: Absent = Absent {
	kind: ScalarKind::Float,
};
static NIL: Primitive = Primitive::Nil;

fn absent_scalar(kind: ScalarKind) -> &'static Absent {
	match kind {
		ScalarKind::Bool => &ABSENT_BOOL,
		ScalarKind::Int => &ABSENT_INT,
		ScalarKind::Uint => &ABSENT_UINT,
		ScalarKind::Float => &ABSENT_FLOAT,
		ScalarKind::Str => &ABSENT,
	}
}

impl Record for Absent {
	fn type_name(&self) -> &'static str {
		"absent"
	}

	fn fields(&self) -> Vec<FieldRef<'_>> {
		Vec::new()
	}

	fn field_mut(&mut self, _name: &str) -> Option<&mut dyn Reflect> {
		None
	}
}

impl Sequence for Absent {
	fn len(&self) -> usize {
		0
	}

	fn element(&self, _index: usize) -> Option<&dyn Reflect> {
		None
	}

	fn element_mut(&mut self, _index: usize) -> Option<&mut dyn Reflect> {
		None
	}

	fn push_zero(&mut self) {}
}

impl Mapping for Absent {
	fn key_kind(&self) -> ScalarKind {
		ScalarKind::Str
	}

	fn entries(&self) -> Vec<(Primitive, &dyn Reflect)> {
		Vec::new()
	}

	fn with_entry(&mut self, _key: Primitive, _write: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<()> {
		Ok(())
	}
}

impl Scalar for Absent {
	fn kind(&self) -> ScalarKind {
		self.kind
	}

	fn get(&self) -> Primitive {
		Primitive::Nil
	}

	fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive> {
		Err(value)
	}

	fn slot_type(&self) -> &'static str {
		"nil"
	}
}
