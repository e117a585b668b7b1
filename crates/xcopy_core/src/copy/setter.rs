use tracing::{debug, trace};

use crate::copy::{Copier, CopyError, Reflect, Result, Sequence, ValueMut};

impl ValueMut<'_> {
	/// Resolve `designator` to a storage slot, materializing it when absent, and copy `value` into it.
	///
	/// Records ignore unknown field names. Sequences grow with zero elements up to the index.
	/// Mapping entries are written back under their key after the copy.
	pub(crate) fn set_field(&mut self, designator: &str, value: &dyn Reflect, copier: &Copier<'_>, depth: u32) -> Result<()> {
		trace!(field = designator, dst = %self.name(), "set field");

		match self {
			Self::Record(record) => {
				let type_name = record.type_name();
				let Some(slot) = record.field_mut(designator) else {
					debug!(field = designator, record = type_name, "no such field, value dropped");
					return Ok(());
				};
				copier.copy_step(value, slot, depth + 1)
			}
			Self::Sequence(sequence) => {
				let index = parse_index(designator, copier.options().max_index)?;
				let slot = element_or_grow(&mut **sequence, index)?;
				copier.copy_step(value, slot, depth + 1)
			}
			Self::Mapping(mapping) => {
				let key = copier.designator_to_key(designator, mapping.key_kind())?;
				mapping.with_entry(key, &mut |slot: &mut dyn Reflect| copier.copy_step(value, slot, depth + 1))
			}
			Self::Scalar(_) | Self::Open(_) => Err(CopyError::Unwritable {
				field: designator.to_owned(),
				shape: self.name(),
			}),
		}
	}
}

/// Decimal index designator, no larger than `max_index`.
fn parse_index(designator: &str, max_index: usize) -> Result<usize> {
	if designator.is_empty() || !designator.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(CopyError::InvalidIndex {
			designator: designator.to_owned(),
		});
	}

	let too_large = || CopyError::IndexTooLarge {
		designator: designator.to_owned(),
		max_index,
	};
	let index = designator.parse::<usize>().map_err(|_| too_large())?;
	if index > max_index {
		return Err(too_large());
	}
	Ok(index)
}

/// Writable element at `index`, appending zero elements until the sequence is long enough.
///
/// Never shrinks. A sequence shorter than `index + 1` ends up exactly `index + 1` long.
pub(crate) fn element_or_grow(sequence: &mut dyn Sequence, index: usize) -> Result<&mut dyn Reflect> {
	while sequence.len() <= index {
		let before = sequence.len();
		sequence.push_zero();
		if sequence.len() == before {
			break;
		}
	}
	sequence.element_mut(index).ok_or_else(|| CopyError::InvalidIndex {
		designator: index.to_string(),
	})
}
