//! Moves field values between managed objects and table rows.
//!
//! Writes produce an ordered column map for one object, flattening embedded
//! composites into their columns. Reads take a row returned by the store and
//! populate an object through the object runtime.

mod fetch;
mod store;
mod value;

use crate::{convert::ConverterRegistry, Schema};

/// Row codec bound to one schema.
#[derive(Debug, Clone, Copy)]
pub struct Codec<'a> {
    schema: &'a Schema,
    converters: &'a ConverterRegistry,
}

impl<'a> Codec<'a> {
    /// `converters` must be the registry the schema was built with.
    pub fn new(schema: &'a Schema, converters: &'a ConverterRegistry) -> Codec<'a> {
        Codec { schema, converters }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }
}
