use crate::copy::{Primitive, Result, ScalarKind, ValueMut, ValueRef};

/// Structural category of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// Compound value with named fields.
	Record,
	/// Ordered homogeneous collection.
	Sequence,
	/// Key to value association.
	Mapping,
	/// Terminal primitive value.
	Scalar,
	/// Slot with no fixed shape until a scalar is assigned.
	Open,
}

impl Shape {
	/// Label used in error messages.
	pub fn name(self) -> &'static str {
		match self {
			Self::Record => "Record",
			Self::Sequence => "Sequence",
			Self::Mapping => "Mapping",
			Self::Scalar => "Scalar",
			Self::Open => "Open",
		}
	}

	/// Whether the shape accepts field-addressed writes.
	pub fn has_fields(self) -> bool {
		matches!(self, Self::Record | Self::Sequence | Self::Mapping)
	}
}

/// Host classification hook: exposes a value as a source or destination view.
///
/// Optional indirections (`Option<T>`, `Box<T>`) classify as their pointee. Obtaining a mutable
/// view of an empty optional allocates a zero-valued pointee first.
pub trait Reflect {
	/// Shared view used when the value is copied from.
	fn reflect(&self) -> Result<ValueRef<'_>>;

	/// Mutable view used when the value is copied into.
	fn reflect_mut(&mut self) -> Result<ValueMut<'_>>;

	/// Host type name for diagnostics.
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Whether this is an empty optional. An absent source never allocates an absent destination.
	fn is_absent(&self) -> bool {
		false
	}
}

/// One exported record field.
#[derive(Clone, Copy)]
pub struct FieldRef<'a> {
	/// Field designator.
	pub name: &'a str,
	/// Current field value.
	pub value: &'a dyn Reflect,
}

/// Compound value with named fields.
///
/// Only exported fields are listed; everything else is invisible to the engine.
pub trait Record {
	/// Record type label.
	fn type_name(&self) -> &'static str;

	/// Exported fields in declaration order.
	fn fields(&self) -> Vec<FieldRef<'_>>;

	/// Writable slot for an exported field, `None` when the record has no such field.
	fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;
}

/// Ordered, growable collection.
pub trait Sequence {
	/// Current element count.
	fn len(&self) -> usize;

	/// Whether the sequence holds no elements.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Element at `index`.
	fn element(&self, index: usize) -> Option<&dyn Reflect>;

	/// Writable element at `index`.
	fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

	/// Append one zero-valued element.
	fn push_zero(&mut self);
}

/// Key to value association with scalar keys.
///
/// Entries are copy-in slots: the engine never holds a reference into the mapping across a
/// write, it hands [`Mapping::with_entry`] a closure that mutates a detached value.
pub trait Mapping {
	/// Native key kind; designators are converted into it.
	fn key_kind(&self) -> ScalarKind;

	/// Entries in the mapping's native iteration order.
	fn entries(&self) -> Vec<(Primitive, &dyn Reflect)>;

	/// Take the entry under `key` (or a zero placeholder when absent), run `write` on it, and store
	/// the result back under `key`.
	///
	/// The entry is stored back even when `write` fails.
	fn with_entry(&mut self, key: Primitive, write: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<()>;
}

/// Terminal primitive slot of a fixed kind.
pub trait Scalar {
	/// Kind the slot stores.
	fn kind(&self) -> ScalarKind;

	/// Current value.
	fn get(&self) -> Primitive;

	/// Store `value`, handing it back when it does not fit the slot.
	///
	/// `value` is normally already of [`Scalar::kind`]; narrower slots may still reject it.
	fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive>;

	/// Slot label for diagnostics.
	fn slot_type(&self) -> &'static str {
		self.kind().name()
	}
}

/// Dynamically typed slot.
pub trait Open {
	/// Value currently held.
	fn held(&self) -> Primitive;

	/// Replace the held value.
	fn assign(&mut self, value: Primitive);
}

/// Classify a value by shape.
pub fn shape_of(value: &dyn Reflect) -> Result<Shape> {
	Ok(value.reflect()?.shape())
}
