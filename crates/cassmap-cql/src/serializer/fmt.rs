use super::{Formatter, Params};

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_cql($f);
        )*
    }};
}

pub(super) trait ToCql {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>);
}

impl ToCql for &str {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self);
    }
}

impl ToCql for &String {
    fn to_cql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self);
    }
}
