//! Declared field types and the values that flow between objects and rows.

mod object_ref;
pub use object_ref::ObjectRef;

mod ty;
pub use ty::{Type, TypeCustom};

mod ty_enum;
pub use ty_enum::TypeEnum;

mod value;
pub use value::Value;

mod value_enum;
pub use value_enum::ValueEnum;

mod value_jiff;

mod value_record;
pub use value_record::ValueRecord;
