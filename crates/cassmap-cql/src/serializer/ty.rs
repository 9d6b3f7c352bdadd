use super::{Params, ToCql};

use cassmap_core::schema::db;

impl ToCql for &db::Type {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use std::fmt::Write;

        // Infallible when writing to a `String`
        let _ = write!(f.dst, "{self}");
    }
}
