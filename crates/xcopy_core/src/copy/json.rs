//! `serde_json` documents as copy sources and destinations.
//!
//! A JSON value is classified by what it currently holds: objects are mappings with string keys,
//! arrays are sequences, strings/numbers/bools are scalars, and `null` is an open slot.

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::copy::{CopyError, Mapping, Open, Primitive, Reflect, Result, Scalar, ScalarKind, ValueMut, ValueRef};

impl Reflect for Value {
	fn reflect(&self) -> Result<ValueRef<'_>> {
		Ok(match self {
			Value::Null => ValueRef::Open(self),
			Value::Bool(_) | Value::Number(_) | Value::String(_) => ValueRef::Scalar(self),
			Value::Array(items) => ValueRef::Sequence(items),
			Value::Object(map) => ValueRef::Mapping(map),
		})
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		Ok(match self {
			Value::Array(items) => ValueMut::Sequence(items),
			Value::Object(map) => ValueMut::Mapping(map),
			Value::Null => ValueMut::Open(self),
			Value::Bool(_) | Value::Number(_) | Value::String(_) => ValueMut::Scalar(self),
		})
	}

	fn type_name(&self) -> &'static str {
		"serde_json::Value"
	}
}

impl Scalar for Value {
	fn kind(&self) -> ScalarKind {
		match self {
			Value::Bool(_) => ScalarKind::Bool,
			Value::Number(number) if number.is_i64() => ScalarKind::Int,
			Value::Number(number) if number.is_u64() => ScalarKind::Uint,
			Value::Number(_) => ScalarKind::Float,
			_ => ScalarKind::Str,
		}
	}

	fn get(&self) -> Primitive {
		primitive_of(self)
	}

	fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive> {
		*self = json_of(value)?;
		Ok(())
	}

	fn slot_type(&self) -> &'static str {
		match self {
			Value::Bool(_) => "json bool",
			Value::Number(_) => "json number",
			_ => "json string",
		}
	}
}

impl Open for Value {
	fn held(&self) -> Primitive {
		primitive_of(self)
	}

	/// Open slots take any scalar, so a value with no JSON form (a non-finite float) is stored as
	/// `null` instead of failing the copy.
	fn assign(&mut self, value: Primitive) {
		*self = json_of(value).unwrap_or_else(|dropped| {
			debug!(value = %dropped, "no json form for open slot value, stored null");
			Value::Null
		});
	}
}

impl Mapping for Map<String, Value> {
	fn key_kind(&self) -> ScalarKind {
		ScalarKind::Str
	}

	fn entries(&self) -> Vec<(Primitive, &dyn Reflect)> {
		self.iter().map(|(key, value)| (Primitive::Str(key.clone()), value as &dyn Reflect)).collect()
	}

	fn with_entry(&mut self, key: Primitive, write: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<()> {
		let key = match key {
			Primitive::Str(key) => key,
			other => return Err(CopyError::conversion(other.kind_name(), ScalarKind::Str.name())),
		};
		let mut slot = self.remove(&key).unwrap_or(Value::Null);
		let outcome = write(&mut slot);
		self.insert(key, slot);
		outcome
	}
}

impl Reflect for Map<String, Value> {
	fn reflect(&self) -> Result<ValueRef<'_>> {
		Ok(ValueRef::Mapping(self))
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		Ok(ValueMut::Mapping(self))
	}
}

/// Scalar content of a JSON value; structured values read as nil.
pub(crate) fn primitive_of(value: &Value) -> Primitive {
	match value {
		Value::Bool(v) => Primitive::Bool(*v),
		Value::Number(number) => {
			if let Some(v) = number.as_i64() {
				Primitive::Int(v)
			} else if let Some(v) = number.as_u64() {
				Primitive::Uint(v)
			} else {
				number.as_f64().map_or(Primitive::Nil, Primitive::Float)
			}
		}
		Value::String(text) => Primitive::Str(text.clone()),
		Value::Null | Value::Array(_) | Value::Object(_) => Primitive::Nil,
	}
}

/// JSON form of a scalar. Non-finite floats have none.
pub(crate) fn json_of(value: Primitive) -> std::result::Result<Value, Primitive> {
	Ok(match value {
		Primitive::Nil => Value::Null,
		Primitive::Bool(v) => Value::Bool(v),
		Primitive::Int(v) => Value::Number(v.into()),
		Primitive::Uint(v) => Value::Number(v.into()),
		Primitive::Float(v) => match Number::from_f64(v) {
			Some(number) => Value::Number(number),
			None => return Err(Primitive::Float(v)),
		},
		Primitive::Str(v) => Value::String(v),
	})
}

#[cfg(test)]
mod tests;
