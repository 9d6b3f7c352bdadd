use super::{Ident, Params, Period, ToCql};

use crate::stmt;

impl ToCql for &stmt::Name {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let parts = Period(self.0.iter().map(Ident));
        fmt!(f, parts);
    }
}
