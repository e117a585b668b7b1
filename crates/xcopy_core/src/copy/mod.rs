mod convert;
mod engine;
mod error;
mod impls;
mod json;
mod primitive;
mod record;
mod setter;
mod shape;
mod value;

/// Conversion collaborator interface and built-in converters.
pub use convert::{ConvertOptions, Converter, IdentityConverter, StandardConverter};
/// Copy engine, options, and the default entry point.
pub use engine::{CopyOptions, Copier, copy};
/// Error and result aliases.
pub use error::{CopyError, Result};
/// Scalar values and kinds.
pub use primitive::{Primitive, ScalarKind};
/// Host classification interface.
pub use shape::{FieldRef, Mapping, Open, Record, Reflect, Scalar, Sequence, Shape, shape_of};
/// Shape-tagged source and destination views.
pub use value::{ValueMut, ValueRef};
