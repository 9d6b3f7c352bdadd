use crate::{schema::db, stmt};

#[derive(Debug, Clone)]
pub struct FieldPrimitive {
    /// The declared type of the field.
    pub ty: stmt::Type,

    /// Storage type hint. When set, selects the column type directly.
    pub storage_ty: Option<db::Type>,
}

impl FieldPrimitive {
    pub fn new(ty: stmt::Type) -> FieldPrimitive {
        FieldPrimitive {
            ty,
            storage_ty: None,
        }
    }

    pub fn with_storage_ty(ty: stmt::Type, storage_ty: db::Type) -> FieldPrimitive {
        FieldPrimitive {
            ty,
            storage_ty: Some(storage_ty),
        }
    }
}

impl From<stmt::Type> for super::FieldTy {
    fn from(value: stmt::Type) -> Self {
        super::FieldTy::Primitive(FieldPrimitive::new(value))
    }
}
