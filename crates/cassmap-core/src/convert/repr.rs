use crate::schema::db;
use std::{collections::HashMap, sync::LazyLock};

/// Runtime representation of a column value on the store side of a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
    String,
    Long,
    Integer,
    Double,
    Float,
    Boolean,
    Timestamp,
    Bytes,
}

static PHYSICAL_TYPES: LazyLock<HashMap<Repr, db::Type>> = LazyLock::new(|| {
    HashMap::from([
        (Repr::String, db::Type::Varchar),
        (Repr::Long, db::Type::BigInt),
        (Repr::Integer, db::Type::Int),
        (Repr::Double, db::Type::Double),
        (Repr::Float, db::Type::Float),
        (Repr::Boolean, db::Type::Boolean),
        (Repr::Timestamp, db::Type::Timestamp),
        (Repr::Bytes, db::Type::Blob),
    ])
});

static REPRS: LazyLock<HashMap<db::Type, Repr>> = LazyLock::new(|| {
    PHYSICAL_TYPES
        .iter()
        .map(|(repr, ty)| (ty.clone(), *repr))
        .collect()
});

impl Repr {
    /// Column type holding this representation.
    pub fn physical_ty(self) -> db::Type {
        PHYSICAL_TYPES[&self].clone()
    }

    /// Representation of a scalar column type. Collections have none.
    pub fn for_physical(ty: &db::Type) -> Option<Repr> {
        REPRS.get(ty).copied()
    }
}
