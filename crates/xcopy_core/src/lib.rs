//! Type-directed copying between records, sequences, mappings, scalars, and open slots.

/// Shape classification, copy protocol, field materialization, and scalar conversion.
pub mod copy;
