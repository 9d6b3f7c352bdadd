//! Bidirectional value converters between field values and column values.

mod builtin;

mod registry;
pub use registry::ConverterRegistry;

mod repr;
pub use repr::Repr;

mod serialized;
pub use serialized::SerializedConverter;

use crate::{stmt::Value, Result};
use std::fmt;

/// Converts between a field value and one physical representation.
pub trait Converter: fmt::Debug + Send + Sync {
    /// Unique name, referenced by field metadata.
    fn name(&self) -> &str;

    /// Name of the declared type handled, as returned by
    /// [`Type::name`](crate::stmt::Type::name).
    fn member_type(&self) -> &str;

    /// The physical representation produced.
    fn repr(&self) -> Repr;

    /// Field value to column value.
    fn to_datastore(&self, value: Value) -> Result<Value>;

    /// Column value to field value.
    fn to_member(&self, value: Value) -> Result<Value>;
}
