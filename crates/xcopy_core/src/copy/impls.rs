use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::copy::{CopyError, Mapping, Open, Primitive, Reflect, Result, Scalar, ScalarKind, Sequence, ValueMut, ValueRef};

macro_rules! scalar_reflect {
	($($ty:ty),* $(,)?) => {$(
		impl Reflect for $ty {
			fn reflect(&self) -> Result<ValueRef<'_>> {
				Ok(ValueRef::Scalar(self))
			}

			fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
				Ok(ValueMut::Scalar(self))
			}
		}
	)*};
}

macro_rules! int_scalar {
	($($ty:ty => $kind:ident($repr:ty)),* $(,)?) => {$(
		impl Scalar for $ty {
			fn kind(&self) -> ScalarKind {
				ScalarKind::$kind
			}

			fn get(&self) -> Primitive {
				Primitive::$kind(*self as $repr)
			}

			fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive> {
				match value {
					Primitive::$kind(raw) => {
						*self = <$ty>::try_from(raw).map_err(|_| Primitive::$kind(raw))?;
						Ok(())
					}
					other => Err(other),
				}
			}

			fn slot_type(&self) -> &'static str {
				stringify!($ty)
			}
		}

		scalar_reflect!($ty);
	)*};
}

int_scalar!(
	i8 => Int(i64),
	i16 => Int(i64),
	i32 => Int(i64),
	i64 => Int(i64),
	isize => Int(i64),
	u8 => Uint(u64),
	u16 => Uint(u64),
	u32 => Uint(u64),
	u64 => Uint(u64),
	usize => Uint(u64),
);

impl Scalar for f64 {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Float
	}

	fn get(&self) -> Primitive {
		Primitive::Float(*self)
	}

	fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive> {
		match value {
			Primitive::Float(raw) => {
				*self = raw;
				Ok(())
			}
			other => Err(other),
		}
	}

	fn slot_type(&self) -> &'static str {
		"f64"
	}
}

impl Scalar for f32 {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Float
	}

	fn get(&self) -> Primitive {
		Primitive::Float(f64::from(*self))
	}

	fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive> {
		match value {
			Primitive::Float(raw) => {
				let narrowed = raw as f32;
				if raw.is_finite() && !narrowed.is_finite() {
					return Err(Primitive::Float(raw));
				}
				*self = narrowed;
				Ok(())
			}
			other => Err(other),
		}
	}

	fn slot_type(&self) -> &'static str {
		"f32"
	}
}

impl Scalar for bool {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Bool
	}

	fn get(&self) -> Primitive {
		Primitive::Bool(*self)
	}

	fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive> {
		match value {
			Primitive::Bool(raw) => {
				*self = raw;
				Ok(())
			}
			other => Err(other),
		}
	}

	fn slot_type(&self) -> &'static str {
		"bool"
	}
}

impl Scalar for String {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Str
	}

	fn get(&self) -> Primitive {
		Primitive::Str(self.clone())
	}

	fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive> {
		match value {
			Primitive::Str(raw) => {
				*self = raw;
				Ok(())
			}
			other => Err(other),
		}
	}

	fn slot_type(&self) -> &'static str {
		"String"
	}
}

/// Single-character string slot.
impl Scalar for char {
	fn kind(&self) -> ScalarKind {
		ScalarKind::Str
	}

	fn get(&self) -> Primitive {
		Primitive::Str(self.to_string())
	}

	fn set(&mut self, value: Primitive) -> std::result::Result<(), Primitive> {
		let single = match &value {
			Primitive::Str(raw) => {
				let mut chars = raw.chars();
				match (chars.next(), chars.next()) {
					(Some(ch), None) => Some(ch),
					_ => None,
				}
			}
			_ => None,
		};
		match single {
			Some(ch) => {
				*self = ch;
				Ok(())
			}
			None => Err(value),
		}
	}

	fn slot_type(&self) -> &'static str {
		"char"
	}
}

scalar_reflect!(f32, f64, bool, String, char);

impl Open for Primitive {
	fn held(&self) -> Primitive {
		self.clone()
	}

	fn assign(&mut self, value: Primitive) {
		*self = value;
	}
}

impl Reflect for Primitive {
	fn reflect(&self) -> Result<ValueRef<'_>> {
		Ok(ValueRef::Open(self))
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		Ok(ValueMut::Open(self))
	}
}

impl Reflect for () {
	fn reflect(&self) -> Result<ValueRef<'_>> {
		Err(CopyError::UnsupportedShape { type_name: "()".to_owned() })
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		Err(CopyError::UnsupportedShape { type_name: "()".to_owned() })
	}
}

impl<T: Reflect + Default> Reflect for Option<T> {
	fn reflect(&self) -> Result<ValueRef<'_>> {
		match self {
			Some(inner) => inner.reflect(),
			None => {
				let zero = T::default();
				let absent = zero.reflect()?.absent();
				Ok(absent)
			}
		}
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		self.get_or_insert_with(T::default).reflect_mut()
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<T>()
	}

	fn is_absent(&self) -> bool {
		match self {
			Some(inner) => inner.is_absent(),
			None => true,
		}
	}
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
	fn reflect(&self) -> Result<ValueRef<'_>> {
		(**self).reflect()
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		(**self).reflect_mut()
	}

	fn type_name(&self) -> &'static str {
		(**self).type_name()
	}

	fn is_absent(&self) -> bool {
		(**self).is_absent()
	}
}

impl<T: Reflect + Default> Sequence for Vec<T> {
	fn len(&self) -> usize {
		Vec::len(self)
	}

	fn element(&self, index: usize) -> Option<&dyn Reflect> {
		self.get(index).map(|item| item as &dyn Reflect)
	}

	fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
		self.get_mut(index).map(|item| item as &mut dyn Reflect)
	}

	fn push_zero(&mut self) {
		self.push(T::default());
	}
}

impl<T: Reflect + Default> Reflect for Vec<T> {
	fn reflect(&self) -> Result<ValueRef<'_>> {
		Ok(ValueRef::Sequence(self))
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		Ok(ValueMut::Sequence(self))
	}
}

impl<T: Reflect + Default> Sequence for VecDeque<T> {
	fn len(&self) -> usize {
		VecDeque::len(self)
	}

	fn element(&self, index: usize) -> Option<&dyn Reflect> {
		self.get(index).map(|item| item as &dyn Reflect)
	}

	fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
		self.get_mut(index).map(|item| item as &mut dyn Reflect)
	}

	fn push_zero(&mut self) {
		self.push_back(T::default());
	}
}

impl<T: Reflect + Default> Reflect for VecDeque<T> {
	fn reflect(&self) -> Result<ValueRef<'_>> {
		Ok(ValueRef::Sequence(self))
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		Ok(ValueMut::Sequence(self))
	}
}

/// Build a native key from an already converted primitive.
fn native_key<K: Scalar + Default>(key: Primitive) -> Result<K> {
	let mut out = K::default();
	let kind = out.kind();
	out.set(key)
		.map_err(|rejected| CopyError::conversion(rejected.kind_name(), kind.name()))?;
	Ok(out)
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
	K: Scalar + Default + Eq + Hash,
	V: Reflect + Default,
	S: BuildHasher,
{
	fn key_kind(&self) -> ScalarKind {
		K::default().kind()
	}

	fn entries(&self) -> Vec<(Primitive, &dyn Reflect)> {
		self.iter().map(|(key, value)| (key.get(), value as &dyn Reflect)).collect()
	}

	fn with_entry(&mut self, key: Primitive, write: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<()> {
		let key = native_key::<K>(key)?;
		let mut slot = self.remove(&key).unwrap_or_default();
		let outcome = write(&mut slot);
		self.insert(key, slot);
		outcome
	}
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
	K: Scalar + Default + Eq + Hash,
	V: Reflect + Default,
	S: BuildHasher,
{
	fn reflect(&self) -> Result<ValueRef<'_>> {
		Ok(ValueRef::Mapping(self))
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		Ok(ValueMut::Mapping(self))
	}
}

impl<K, V> Mapping for BTreeMap<K, V>
where
	K: Scalar + Default + Ord,
	V: Reflect + Default,
{
	fn key_kind(&self) -> ScalarKind {
		K::default().kind()
	}

	fn entries(&self) -> Vec<(Primitive, &dyn Reflect)> {
		self.iter().map(|(key, value)| (key.get(), value as &dyn Reflect)).collect()
	}

	fn with_entry(&mut self, key: Primitive, write: &mut dyn FnMut(&mut dyn Reflect) -> Result<()>) -> Result<()> {
		let key = native_key::<K>(key)?;
		let mut slot = self.remove(&key).unwrap_or_default();
		let outcome = write(&mut slot);
		self.insert(key, slot);
		outcome
	}
}

impl<K, V> Reflect for BTreeMap<K, V>
where
	K: Scalar + Default + Ord,
	V: Reflect + Default,
{
	fn reflect(&self) -> Result<ValueRef<'_>> {
		Ok(ValueRef::Mapping(self))
	}

	fn reflect_mut(&mut self) -> Result<ValueMut<'_>> {
		Ok(ValueMut::Mapping(self))
	}
}
