use crate::copy::{Primitive, ScalarKind};

/// Behavior switches passed to a [`Converter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
	/// Convert [`Primitive::Nil`] to the zero value of the target kind.
	pub nil_to_zero: bool,
}

/// Scalar-to-scalar conversion collaborator.
///
/// Returning `None` means no conversion exists for the pair; the engine reports it as
/// [`CopyError::Conversion`](crate::copy::CopyError::Conversion). A returned value must be of
/// kind `target`.
pub trait Converter {
	/// Convert `value` into a scalar of kind `target`.
	fn convert(&self, value: &Primitive, target: ScalarKind, options: ConvertOptions) -> Option<Primitive>;
}

impl<F> Converter for F
where
	F: Fn(&Primitive, ScalarKind, ConvertOptions) -> Option<Primitive>,
{
	fn convert(&self, value: &Primitive, target: ScalarKind, options: ConvertOptions) -> Option<Primitive> {
		self(value, target, options)
	}
}

/// Default converter: parses and formats strings, and moves between numeric kinds when the value
/// survives the trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConverter;

impl Converter for StandardConverter {
	fn convert(&self, value: &Primitive, target: ScalarKind, options: ConvertOptions) -> Option<Primitive> {
		if let Some(done) = identity_or_nil(value, target, options) {
			return done;
		}

		match (value, target) {
			(Primitive::Str(text), ScalarKind::Int) => text.parse::<i64>().ok().map(Primitive::Int),
			(Primitive::Str(text), ScalarKind::Uint) => text.parse::<u64>().ok().map(Primitive::Uint),
			(Primitive::Str(text), ScalarKind::Float) => text.parse::<f64>().ok().map(Primitive::Float),
			(Primitive::Str(text), ScalarKind::Bool) => text.parse::<bool>().ok().map(Primitive::Bool),
			(Primitive::Bool(_) | Primitive::Int(_) | Primitive::Uint(_) | Primitive::Float(_), ScalarKind::Str) => {
				Some(Primitive::Str(value.to_string()))
			}
			(Primitive::Int(v), ScalarKind::Uint) => u64::try_from(*v).ok().map(Primitive::Uint),
			(Primitive::Uint(v), ScalarKind::Int) => i64::try_from(*v).ok().map(Primitive::Int),
			(Primitive::Int(v), ScalarKind::Float) => Some(Primitive::Float(*v as f64)),
			(Primitive::Uint(v), ScalarKind::Float) => Some(Primitive::Float(*v as f64)),
			(Primitive::Float(v), ScalarKind::Int) => float_to_i64(*v).map(Primitive::Int),
			(Primitive::Float(v), ScalarKind::Uint) => float_to_u64(*v).map(Primitive::Uint),
			_ => None,
		}
	}
}

/// Converter that only passes same-kind values through and applies the nil fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl Converter for IdentityConverter {
	fn convert(&self, value: &Primitive, target: ScalarKind, options: ConvertOptions) -> Option<Primitive> {
		identity_or_nil(value, target, options).flatten()
	}
}

/// Outer `None` when neither rule applies.
fn identity_or_nil(value: &Primitive, target: ScalarKind, options: ConvertOptions) -> Option<Option<Primitive>> {
	match value.kind() {
		None if options.nil_to_zero => Some(Some(Primitive::zero(target))),
		None => Some(None),
		Some(kind) if kind == target => Some(Some(value.clone())),
		Some(_) => None,
	}
}

// 2^63 and 2^64 are exact in f64, so the upper bounds are exclusive.
fn float_to_i64(value: f64) -> Option<i64> {
	if value.fract() != 0.0 || value < -9_223_372_036_854_775_808.0 || value >= 9_223_372_036_854_775_808.0 {
		return None;
	}
	Some(value as i64)
}

fn float_to_u64(value: f64) -> Option<u64> {
	if value.fract() != 0.0 || value < 0.0 || value >= 18_446_744_073_709_551_616.0 {
		return None;
	}
	Some(value as u64)
}

#[cfg(test)]
mod tests;
