use super::{
    app::{CollectionKind, Element, Field, FieldTy},
    db,
};
use crate::{
    convert::{Converter, ConverterRegistry, Repr},
    stmt,
};
use std::sync::Arc;
use tracing::warn;

/// Physical type of a column plus the converter bound to it.
#[derive(Debug, Clone)]
pub struct ColumnType {
    pub ty: db::Type,
    pub converter: Option<Arc<dyn Converter>>,
}

/// One step of the fallback policy for declared types without a fixed
/// physical type.
pub struct FallbackRule {
    /// Column type used when the rule matches
    pub ty: db::Type,

    /// Returns the converter to bind, or `None` when the rule does not match
    pub select: fn(&stmt::Type, &ConverterRegistry) -> Option<Arc<dyn Converter>>,
}

static FALLBACK_RULES: [FallbackRule; 4] = [
    FallbackRule {
        ty: db::Type::Varchar,
        select: |ty, converters| converters.find(ty, Repr::String).cloned(),
    },
    FallbackRule {
        ty: db::Type::BigInt,
        select: |ty, converters| converters.find(ty, Repr::Long).cloned(),
    },
    FallbackRule {
        ty: db::Type::Int,
        select: |ty, converters| converters.find(ty, Repr::Integer).cloned(),
    },
    FallbackRule {
        ty: db::Type::Blob,
        select: |ty, converters| {
            if ty.is_serializable() {
                Some(converters.serialized().clone())
            } else {
                None
            }
        },
    },
];

/// Rules tried in order once the fixed table and enum default miss.
pub fn fallback_rules() -> &'static [FallbackRule] {
    &FALLBACK_RULES
}

impl ColumnType {
    fn new(ty: db::Type, converter: Option<Arc<dyn Converter>>) -> ColumnType {
        ColumnType { ty, converter }
    }

    fn untyped(ty: db::Type) -> ColumnType {
        ColumnType { ty, converter: None }
    }

    /// Column type for a converter: the physical type of its representation.
    fn for_converter(converter: &Arc<dyn Converter>) -> ColumnType {
        ColumnType::new(converter.repr().physical_ty(), Some(converter.clone()))
    }
}

/// Resolves the column type of a field that maps to a single column.
///
/// Never fails: anything that cannot be resolved is stored as `varchar` and a
/// warning is logged.
pub fn resolve_column_type(field: &Field, converters: &ConverterRegistry) -> ColumnType {
    let declared = match &field.ty {
        FieldTy::Primitive(primitive) => Some(&primitive.ty),
        _ => None,
    };

    if let Some(name) = &field.converter {
        match converters.by_name(name) {
            Some(converter) => return ColumnType::for_converter(converter),
            None => warn!(
                field = %field.name.app_name,
                converter = %name,
                "field names an unknown converter; ignoring it"
            ),
        }
    }

    if let Some(converter) = declared.and_then(|ty| converters.auto_apply(ty)) {
        return ColumnType::for_converter(converter);
    }

    let resolved = match &field.ty {
        FieldTy::Primitive(primitive) => {
            if field.serialized && primitive.ty.is_serializable() {
                Some(serialized(converters))
            } else {
                Some(resolve_scalar(
                    &primitive.ty,
                    primitive.storage_ty.as_ref(),
                    converters,
                ))
            }
        }
        FieldTy::Collection(_) | FieldTy::Map(_) | FieldTy::Array(_) if field.serialized => {
            Some(serialized(converters))
        }
        FieldTy::Collection(collection) => {
            let element =
                element_ty(&collection.element, collection.serialized_element, converters);
            let as_list = match collection.kind {
                CollectionKind::List => true,
                CollectionKind::Set => false,
                CollectionKind::Collection => {
                    let unique_references =
                        collection.many_to_many && collection.element.is_reference();
                    collection.ordered && !unique_references
                }
            };

            Some(ColumnType::untyped(if as_list {
                db::Type::list(element)
            } else {
                db::Type::set(element)
            }))
        }
        FieldTy::Map(map) => Some(ColumnType::untyped(db::Type::map(
            element_ty(&map.key, map.serialized_key, converters),
            element_ty(&map.value, map.serialized_value, converters),
        ))),
        FieldTy::Array(array) => Some(ColumnType::untyped(db::Type::list(element_ty(
            &array.element,
            array.serialized_element,
            converters,
        )))),
        FieldTy::Reference(_) | FieldTy::Embedded(_) => {
            if field.serialized {
                Some(serialized(converters))
            } else {
                // The identity string of the referenced object
                Some(ColumnType::untyped(db::Type::Varchar))
            }
        }
    };

    resolved.unwrap_or_else(|| {
        warn!(field = %field.name.app_name, "no column type for field; storing as varchar");
        ColumnType::untyped(db::Type::Varchar)
    })
}

fn serialized(converters: &ConverterRegistry) -> ColumnType {
    ColumnType::new(db::Type::Blob, Some(converters.serialized().clone()))
}

/// Column type of a scalar declared type.
fn resolve_scalar(
    ty: &stmt::Type,
    hint: Option<&db::Type>,
    converters: &ConverterRegistry,
) -> ColumnType {
    if let Some(hint) = hint {
        match Repr::for_physical(hint) {
            Some(repr) => {
                return ColumnType::new(hint.clone(), converters.find(ty, repr).cloned());
            }
            None => warn!(%hint, ty = ty.name(), "storage hint is not a scalar type; ignoring it"),
        }
    }

    if let Some(physical) = db::Type::for_declared(ty) {
        let converter = Repr::for_physical(&physical)
            .and_then(|repr| converters.find(ty, repr));
        return ColumnType::new(physical, converter.cloned());
    }

    if ty.is_enum() {
        // Ordinal
        return ColumnType::untyped(db::Type::Int);
    }

    for rule in fallback_rules() {
        if let Some(converter) = (rule.select)(ty, converters) {
            return ColumnType::new(rule.ty.clone(), Some(converter));
        }
    }

    warn!(ty = ty.name(), "no column type for declared type; storing as varchar");
    ColumnType::untyped(db::Type::Varchar)
}

/// Physical type of a container element, key or value.
fn element_ty(element: &Element, serialized: bool, converters: &ConverterRegistry) -> db::Type {
    if serialized {
        return db::Type::Blob;
    }

    match element {
        Element::Value(ty) => resolve_scalar(ty, None, converters).ty,
        Element::Reference(_) => db::Type::Varchar,
        Element::Embedded(_) => {
            warn!("containers of embedded objects are not column mapped; storing as varchar");
            db::Type::Varchar
        }
    }
}
