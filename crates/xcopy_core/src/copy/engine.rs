use tracing::trace;

use crate::copy::{ConvertOptions, Converter, CopyError, Primitive, Reflect, Result, ScalarKind, StandardConverter};

static STANDARD: StandardConverter = StandardConverter;

/// Runtime limits and behavior switches for a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOptions {
	/// Maximum nesting depth followed before the copy fails.
	pub max_depth: u32,
	/// Largest sequence index a designator may address; destinations never grow past it.
	pub max_index: usize,
	/// Copy nil scalar sources as the destination's zero value.
	pub nil_to_zero: bool,
}

impl Default for CopyOptions {
	fn default() -> Self {
		Self {
			max_depth: 256,
			max_index: 1 << 20,
			nil_to_zero: true,
		}
	}
}

impl CopyOptions {
	/// Preset that fails on nil scalar sources instead of zeroing the destination.
	pub fn strict() -> Self {
		Self {
			nil_to_zero: false,
			..Self::default()
		}
	}
}

/// Copy engine: a conversion collaborator plus options.
pub struct Copier<'c> {
	converter: &'c dyn Converter,
	options: CopyOptions,
}

impl Default for Copier<'static> {
	fn default() -> Self {
		Self::new(&STANDARD, CopyOptions::default())
	}
}

impl<'c> Copier<'c> {
	/// Create an engine around `converter`.
	pub fn new(converter: &'c dyn Converter, options: CopyOptions) -> Self {
		Self { converter, options }
	}

	/// Active options.
	pub fn options(&self) -> &CopyOptions {
		&self.options
	}

	/// Copy `src` into `dst`, converting scalars and materializing destination storage on demand.
	///
	/// Fails on the first error; `dst` keeps whatever was written before it.
	pub fn copy<S, D>(&self, src: &S, dst: &mut D) -> Result<()>
	where
		S: Reflect + ?Sized,
		D: Reflect + ?Sized,
	{
		self.copy_step(src, dst, 0)
	}

	pub(crate) fn copy_step<S, D>(&self, src: &S, dst: &mut D, depth: u32) -> Result<()>
	where
		S: Reflect + ?Sized,
		D: Reflect + ?Sized,
	{
		if depth > self.options.max_depth {
			return Err(CopyError::DepthExceeded {
				max_depth: self.options.max_depth,
			});
		}

		if src.is_absent() && dst.is_absent() {
			trace!(depth, dst = dst.type_name(), "absent source into absent destination, skipped");
			return Ok(());
		}

		let source = src.reflect()?;
		let mut target = dst.reflect_mut()?;
		source.copy_into(&mut target, self, depth)
	}

	pub(crate) fn convert_scalar(&self, value: &Primitive, target: ScalarKind) -> Option<Primitive> {
		let options = ConvertOptions {
			nil_to_zero: self.options.nil_to_zero,
		};
		self.converter.convert(value, target, options).filter(|out| out.kind() == Some(target))
	}

	/// Mapping key to field designator.
	pub(crate) fn key_to_designator(&self, key: &Primitive) -> Result<String> {
		match self.converter.convert(key, ScalarKind::Str, ConvertOptions::default()) {
			Some(Primitive::Str(text)) => Ok(text),
			_ => Err(CopyError::conversion(key.kind_name(), ScalarKind::Str.name())),
		}
	}

	/// Field designator to a mapping key of `kind`.
	pub(crate) fn designator_to_key(&self, designator: &str, kind: ScalarKind) -> Result<Primitive> {
		self.converter
			.convert(&Primitive::Str(designator.to_owned()), kind, ConvertOptions::default())
			.filter(|key| key.kind() == Some(kind))
			.ok_or_else(|| CopyError::conversion(ScalarKind::Str.name(), kind.name()))
	}
}

/// Copy `src` into `dst` with the [`StandardConverter`] and default options.
pub fn copy<S, D>(src: &S, dst: &mut D) -> Result<()>
where
	S: Reflect + ?Sized,
	D: Reflect + ?Sized,
{
	Copier::default().copy(src, dst)
}
