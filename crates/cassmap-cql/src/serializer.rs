#[macro_use]
mod fmt;
use fmt::ToCql;

mod delim;
use delim::{Comma, Period};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod name;
mod statement;
mod ty;

use crate::stmt::Statement;

/// Serialize a statement to a single line of CQL
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized CQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    /// Serializes `stmt`, pushing bound values onto `params`.
    ///
    /// The statement is not terminated; script output appends the `;`.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_cql(&mut fmt);

        ret
    }
}
