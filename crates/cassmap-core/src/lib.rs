#[macro_use]
mod macros;

pub mod codec;

pub mod convert;
pub use convert::{Converter, ConverterRegistry};

pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError, ValidationIssue};

pub mod runtime;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses cassmap's [`Error`] type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

pub use async_trait::async_trait;
