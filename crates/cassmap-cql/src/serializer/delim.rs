use super::{Formatter, Params, ToCql};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// Period delimited
pub(super) struct Period<L>(pub(super) L);

impl<L> ToCql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToCql,
{
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}

impl<L, I> ToCql for Period<L>
where
    L: IntoIterator<Item = I>,
    I: ToCql,
{
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let mut s = "";
        for i in self.0.into_iter() {
            fmt!(f, s i);
            s = ".";
        }
    }
}
