use cassmap_core::stmt::Value;
use std::fmt::Write;

/// Renders `cql` with each `?` placeholder replaced by its bound value.
///
/// Strings are single-quoted. Only used for diagnostics; the result is not
/// meant to be executed.
pub fn with_params(cql: &str, params: &[Value]) -> String {
    let mut params = params.iter();
    let mut ret = String::with_capacity(cql.len());

    for c in cql.chars() {
        if c != '?' {
            ret.push(c);
            continue;
        }

        match params.next() {
            Some(value) => render(&mut ret, value),
            None => ret.push(c),
        }
    }

    ret
}

fn render(dst: &mut String, value: &Value) {
    let _ = match value {
        Value::Null => write!(dst, "null"),
        Value::String(v) => write!(dst, "'{v}'"),
        Value::Bool(v) => write!(dst, "{v}"),
        Value::I32(v) => write!(dst, "{v}"),
        Value::I64(v) => write!(dst, "{v}"),
        Value::F32(v) => write!(dst, "{v}"),
        Value::F64(v) => write!(dst, "{v}"),
        Value::Timestamp(v) => write!(dst, "'{v}'"),
        Value::Ref(v) => write!(dst, "'{v}'"),
        Value::Bytes(v) => write!(dst, "<{} bytes>", v.len()),
        value => write!(dst, "{value:?}"),
    };
}
