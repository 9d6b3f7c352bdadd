mod log;
pub use log::with_params;

pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::Statement;
