mod support;
use support::*;

use cassmap_core::{
    convert::{Converter, Repr},
    schema::{
        app::{
            CollectionKind, Element, FieldArray, FieldCollection, FieldMap, FieldPrimitive,
            FieldTy, Reference,
        },
        db::Type,
        fallback_rules, resolve_column_type,
    },
    stmt::{self, TypeEnum, Value},
    ConverterRegistry,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn resolve(ty: impl Into<FieldTy>) -> cassmap_core::schema::ColumnType {
    resolve_column_type(&field(PERSON, 0, "value", ty), &ConverterRegistry::default())
}

#[test]
fn every_declared_type_has_its_physical_type_and_a_converter() {
    let converters = ConverterRegistry::default();

    for (declared, physical) in Type::declared_types() {
        let resolved =
            resolve_column_type(&field(PERSON, 0, "value", declared.clone()), &converters);

        assert_eq!(&resolved.ty, physical, "{declared:?}");

        let converter = resolved
            .converter
            .unwrap_or_else(|| panic!("no converter for {declared:?}"));
        assert_eq!(converter.repr().physical_ty(), *physical, "{declared:?}");
        assert_eq!(converter.member_type(), declared.name());
    }
}

#[test]
fn storage_hint_selects_column_type() {
    let resolved = resolve(FieldPrimitive::with_storage_ty(stmt::Type::Timestamp, Type::BigInt));
    assert_eq!(resolved.ty, Type::BigInt);
    assert_eq!(resolved.converter.unwrap().repr(), Repr::Long);

    let resolved = resolve(FieldPrimitive::with_storage_ty(stmt::Type::Date, Type::Varchar));
    assert_eq!(resolved.ty, Type::Varchar);
    assert_eq!(resolved.converter.unwrap().name(), "date_to_string");
}

#[test]
fn enums_default_to_ordinal() {
    let status = TypeEnum::new("Status", ["Active", "Retired"]);

    let resolved = resolve(stmt::Type::Enum(status.clone()));
    assert_eq!(resolved.ty, Type::Int);
    assert!(resolved.converter.is_none());

    let resolved = resolve(FieldPrimitive::with_storage_ty(
        stmt::Type::Enum(status),
        Type::Varchar,
    ));
    assert_eq!(resolved.ty, Type::Varchar);
}

#[test]
fn fallback_rules_in_order() {
    let tys = fallback_rules()
        .iter()
        .map(|rule| rule.ty.clone())
        .collect::<Vec<_>>();

    assert_eq!(tys, [Type::Varchar, Type::BigInt, Type::Int, Type::Blob]);
}

#[test]
fn uuid_falls_back_to_string() {
    let resolved = resolve(stmt::Type::Uuid);
    assert_eq!(resolved.ty, Type::Varchar);
    assert_eq!(resolved.converter.unwrap().name(), "uuid_to_string");
}

#[test]
fn serializable_custom_type_is_a_blob() {
    let resolved = resolve(stmt::Type::custom("Money", true));
    assert_eq!(resolved.ty, Type::Blob);
    assert!(resolved.converter.is_some());
}

#[test]
fn unresolvable_type_is_varchar() {
    let resolved = resolve(stmt::Type::custom("Socket", false));
    assert_eq!(resolved.ty, Type::Varchar);
    assert!(resolved.converter.is_none());
}

#[test]
fn serialized_field_is_a_blob() {
    let mut value = field(PERSON, 0, "value", stmt::Type::String);
    value.serialized = true;

    let resolved = resolve_column_type(&value, &ConverterRegistry::default());
    assert_eq!(resolved.ty, Type::Blob);
}

#[test]
fn named_converter_wins() {
    let converters = ConverterRegistry::default();

    let mut value = field(PERSON, 0, "value", stmt::Type::Timestamp);
    value.converter = Some("timestamp_to_long".to_string());
    assert_eq!(resolve_column_type(&value, &converters).ty, Type::BigInt);

    value.converter = Some("no_such_converter".to_string());
    assert_eq!(resolve_column_type(&value, &converters).ty, Type::Timestamp);
}

#[test]
fn references_store_identity_strings() {
    assert_eq!(resolve(Reference::new(ADDRESS)).ty, Type::Varchar);
}

#[test]
fn collections() {
    let list = FieldCollection::new(CollectionKind::List, Element::Value(stmt::Type::I64));
    assert_eq!(resolve(list).ty, Type::list(Type::BigInt));

    let set = FieldCollection::new(CollectionKind::Set, Element::Value(stmt::Type::String));
    assert_eq!(resolve(set).ty, Type::set(Type::Varchar));

    let mut ordered =
        FieldCollection::new(CollectionKind::Collection, Element::Value(stmt::Type::F64));
    assert_eq!(resolve(ordered.clone()).ty, Type::set(Type::Double));
    ordered.ordered = true;
    assert_eq!(resolve(ordered).ty, Type::list(Type::Double));

    let mut many_to_many =
        FieldCollection::new(CollectionKind::Collection, Element::Reference(PERSON));
    many_to_many.ordered = true;
    many_to_many.many_to_many = true;
    assert_eq!(resolve(many_to_many).ty, Type::set(Type::Varchar));

    let array = FieldArray::new(Element::Value(stmt::Type::Bool));
    assert_eq!(resolve(array).ty, Type::list(Type::Boolean));

    let map = FieldMap::new(Element::Value(stmt::Type::String), Element::Value(stmt::Type::I32));
    assert_eq!(resolve(map).ty, Type::map(Type::Varchar, Type::Int));
    assert_eq!(Type::map(Type::Varchar, Type::Int).to_string(), "map<varchar,int>");

    let mut serialized = FieldMap::new(
        Element::Value(stmt::Type::String),
        Element::Value(stmt::Type::custom("Money", true)),
    );
    serialized.serialized_value = true;
    assert_eq!(resolve(serialized).ty, Type::map(Type::Varchar, Type::Blob));
}

#[test]
fn fields_are_classified_once() {
    use cassmap_core::schema::app::{Embedded, RelationKind, StorageShape};

    let cases: Vec<(FieldTy, RelationKind, StorageShape)> = vec![
        (stmt::Type::I32.into(), RelationKind::None, StorageShape::Scalar),
        (Reference::new(PERSON).into(), RelationKind::Reference, StorageShape::Scalar),
        (Embedded::new(ADDRESS).into(), RelationKind::Embedded, StorageShape::Composite),
        (
            FieldCollection::new(CollectionKind::Set, Element::Reference(PERSON)).into(),
            RelationKind::ReferenceMulti,
            StorageShape::Collection,
        ),
        (
            FieldMap::new(Element::Value(stmt::Type::String), Element::Embedded(ADDRESS)).into(),
            RelationKind::EmbeddedMulti,
            StorageShape::Map,
        ),
        (
            FieldArray::new(Element::Value(stmt::Type::I64)).into(),
            RelationKind::None,
            StorageShape::Array,
        ),
    ];

    for (ty, relation, shape) in cases {
        let value = field(PERSON, 0, "value", ty);
        assert_eq!(value.relation_kind(), relation, "{:?}", value.ty);
        assert_eq!(value.shape(), shape, "{:?}", value.ty);
    }
}

#[derive(Debug)]
struct MoneyToLong;

impl Converter for MoneyToLong {
    fn name(&self) -> &str {
        "money_to_cents"
    }

    fn member_type(&self) -> &str {
        "Money"
    }

    fn repr(&self) -> Repr {
        Repr::Long
    }

    fn to_datastore(&self, value: Value) -> cassmap_core::Result<Value> {
        Ok(value)
    }

    fn to_member(&self, value: Value) -> cassmap_core::Result<Value> {
        Ok(value)
    }
}

#[test]
fn auto_apply_converter() {
    let mut converters = ConverterRegistry::default();
    converters.register_auto_apply(Arc::new(MoneyToLong));

    let resolved = resolve_column_type(
        &field(PERSON, 0, "price", stmt::Type::custom("Money", true)),
        &converters,
    );
    assert_eq!(resolved.ty, Type::BigInt);
    assert_eq!(resolved.converter.unwrap().name(), "money_to_cents");
    assert!(converters.names().any(|name| name == "money_to_cents"));

    // Registered without auto-apply, the long fallback rule still finds it
    let mut converters = ConverterRegistry::empty();
    converters.register(Arc::new(MoneyToLong));
    let resolved = resolve_column_type(
        &field(PERSON, 0, "price", stmt::Type::custom("Money", true)),
        &converters,
    );
    assert_eq!(resolved.ty, Type::BigInt);
}
