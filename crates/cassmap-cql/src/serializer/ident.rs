use super::{Formatter, Params, ToCql};

/// An unquoted identifier. The store folds it to lower case.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToCql for Ident<S> {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self.0.as_ref());
    }
}
