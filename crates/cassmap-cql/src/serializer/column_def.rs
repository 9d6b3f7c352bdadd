use super::{Ident, Params, ToCql};

use crate::stmt;

impl ToCql for &stmt::ColumnDef {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let ty = &self.ty;

        fmt!(f, name " " ty)
    }
}
