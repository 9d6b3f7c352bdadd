mod support;
use support::*;

use cassmap_core::{
    codec::Codec,
    driver::Row,
    runtime::{Identity, Object, ObjectState, Objects},
    schema::{
        app::{
            CollectionKind, Discriminator, Element, FieldCollection, FieldMap, FieldPrimitive,
            IdentityKind, Reference, Schema as AppSchema, Version, VersionStrategy,
        },
        db, Builder,
    },
    stmt::{self, ObjectRef, TypeEnum, Value, ValueEnum, ValueRecord},
    ConverterRegistry, Schema,
};
use pretty_assertions::assert_eq;

fn columns(values: &indexmap::IndexMap<String, Value>) -> Vec<(&str, Value)> {
    values
        .iter()
        .map(|(name, value)| (&name[..], value.clone()))
        .collect()
}

fn alice(schema: &Schema) -> Object {
    let address = Object::new(&schema.app, ADDRESS, "Address:1").with_field(0, "Main St");

    Object::new(&schema.app, PERSON, "Person:alice")
        .with_field(0, "alice")
        .with_field(1, 30)
        .with_embedded(2, address)
}

/// The row a store would return for the written values.
fn stored_row(values: indexmap::IndexMap<String, Value>) -> Row {
    values.into_iter().collect()
}

fn status() -> TypeEnum {
    TypeEnum::new("Status", ["Active", "Retired"])
}

#[test]
fn store_flattens_embedded_fields() {
    let schema = build(person()).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let mut object = alice(&schema);
    let values = codec.store_fields(&mut object, None).unwrap();

    assert_eq!(
        columns(&values),
        [
            ("name", Value::from("alice")),
            ("age", Value::I32(30)),
            ("address_street", Value::from("Main St")),
        ]
    );
}

#[test]
fn store_repairs_owner_back_reference() {
    let schema = build(person()).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let mut object = alice(&schema);
    codec.store_fields(&mut object, None).unwrap();

    let address = object.embedded_object(2).unwrap();
    assert_eq!(address.field(1), &Value::Ref(ObjectRef::new("Person:alice")));
}

#[test]
fn absent_composite_nulls_its_columns() {
    let schema = build(person()).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let mut object = Object::new(&schema.app, PERSON, "Person:bob").with_field(0, "bob");
    let values = codec.store_fields(&mut object, None).unwrap();

    assert_eq!(
        columns(&values),
        [
            ("name", Value::from("bob")),
            ("age", Value::Null),
            ("address_street", Value::Null),
        ]
    );
}

#[test]
fn enums_store_ordinal_or_name() {
    let mut classes = person();
    classes[0]
        .fields
        .push(field(PERSON, 3, "status", stmt::Type::Enum(status())));
    classes[0].fields.push(field(
        PERSON,
        4,
        "previous_status",
        FieldPrimitive::with_storage_ty(stmt::Type::Enum(status()), db::Type::Varchar),
    ));
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let retired = ValueEnum::from_name(&status(), "Retired").unwrap();
    let mut object = Object::new(&schema.app, PERSON, "Person:carol")
        .with_field(0, "carol")
        .with_field(3, retired.clone())
        .with_field(4, retired);
    let values = codec.store_fields(&mut object, None).unwrap();

    assert_eq!(values["status"], Value::I32(1));
    assert_eq!(values["previous_status"], Value::from("Retired"));
}

#[test]
fn temporal_values_follow_the_column_type() {
    let mut classes = person();
    classes[0]
        .fields
        .push(field(PERSON, 3, "born", stmt::Type::Date));
    classes[0].fields.push(field(
        PERSON,
        4,
        "seen",
        FieldPrimitive::with_storage_ty(stmt::Type::Timestamp, db::Type::BigInt),
    ));
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let born = jiff::civil::date(1990, 4, 2);
    let seen = jiff::Timestamp::from_millisecond(1_000).unwrap();
    let mut object = Object::new(&schema.app, PERSON, "Person:dan")
        .with_field(0, "dan")
        .with_field(3, Value::Date(born))
        .with_field(4, Value::Timestamp(seen));
    let values = codec.store_fields(&mut object, None).unwrap();

    assert_eq!(
        values["born"],
        Value::Timestamp("1990-04-02T00:00:00Z".parse().unwrap())
    );
    assert_eq!(values["seen"], Value::I64(1_000));
}

#[test]
fn surrogate_columns_are_written() {
    let mut classes = person();
    classes[0].fields[0].primary_key = false;
    let root = root_mut(&mut classes[0]);
    root.identity = IdentityKind::Datastore;
    root.version = Some(Version {
        strategy: VersionStrategy::Number,
        field: None,
    });
    root.discriminator = Some(Discriminator {
        column: None,
        value: "P".to_string(),
    });

    let converters = ConverterRegistry::default();
    let app = AppSchema::from_classes(classes).unwrap();
    let schema = Builder::new()
        .multitenancy(true)
        .build(app, &converters)
        .unwrap();
    let codec = Codec::new(&schema, &converters);

    let mut object = alice(&schema)
        .with_identity(Identity::Datastore(42))
        .with_version(7i64);
    let values = codec.store_fields(&mut object, Some("acme")).unwrap();

    assert_eq!(
        columns(&values),
        [
            ("name", Value::from("alice")),
            ("age", Value::I32(30)),
            ("address_street", Value::from("Main St")),
            ("version", Value::I32(7)),
            ("dtype", Value::from("P")),
            ("tenant_id", Value::from("acme")),
            ("person_id", Value::I64(42)),
        ]
    );

    // Not yet persisted
    let mut object = Object::new(&schema.app, PERSON, "Person:new");
    let values = codec.store_fields(&mut object, None).unwrap();
    assert_eq!(values["version"], Value::Null);
    assert_eq!(values["tenant_id"], Value::Null);
    assert_eq!(values["person_id"], Value::Null);
}

#[test]
fn embeddable_class_has_no_row() {
    let schema = build(person()).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let mut address = Object::new(&schema.app, ADDRESS, "Address:1");
    assert!(codec.store_fields(&mut address, None).is_err());
}

#[test]
fn row_becomes_managed_object() {
    let schema = build(person()).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);
    let mut objects = Objects::new(&schema.app);

    let row = Row::new()
        .with("name", "alice")
        .with("age", 30)
        .with("address_street", "Main St");

    let reference = codec
        .object_for_row(PERSON, &row, &mut objects)
        .unwrap()
        .object_ref();
    assert_eq!(reference, ObjectRef::new("Person:alice"));

    let alice = objects.get(&reference).unwrap();
    assert_eq!(alice.field(0), &Value::from("alice"));
    assert_eq!(alice.field(1), &Value::I32(30));
    assert_eq!(
        alice.field(2),
        &Value::Record(ValueRecord::from_vec(vec![
            Value::from("Main St"),
            Value::Ref(ObjectRef::new("Person:alice")),
        ]))
    );
    assert_eq!(alice.identity(), Some(Identity::Application(vec![Value::from("alice")])));
}

#[test]
fn managed_object_is_not_reloaded() {
    let schema = build(person()).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);
    let mut objects = Objects::new(&schema.app);

    let row = Row::new()
        .with("name", "alice")
        .with("age", 30)
        .with("address_street", Value::Null);
    codec.object_for_row(PERSON, &row, &mut objects).unwrap();

    let newer = row.clone().with("age", 31);
    codec.object_for_row(PERSON, &newer, &mut objects).unwrap();

    assert_eq!(objects.len(), 1);
    let alice = objects.get(&ObjectRef::new("Person:alice")).unwrap();
    assert_eq!(alice.field(1), &Value::I32(30));

    // All columns of the composite are null
    assert_eq!(alice.field(2), &Value::Null);
}

#[test]
fn version_is_restored_from_the_row() {
    let mut classes = person();
    root_mut(&mut classes[0]).version = Some(Version {
        strategy: VersionStrategy::Number,
        field: None,
    });
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);
    let mut objects = Objects::new(&schema.app);

    let row = Row::new()
        .with("name", "alice")
        .with("age", Value::Null)
        .with("address_street", Value::Null)
        .with("version", 3);

    let state = codec.object_for_row(PERSON, &row, &mut objects).unwrap();
    assert_eq!(state.version(), Some(Value::I32(3)));
}

#[test]
fn datastore_identity_from_the_row() {
    let mut classes = person();
    classes[0].fields[0].primary_key = false;
    root_mut(&mut classes[0]).identity = IdentityKind::Datastore;
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let row = Row::new().with("person_id", 42i64);
    assert_eq!(
        codec.identity_for_row(PERSON, &row).unwrap(),
        Identity::Datastore(42)
    );

    let row = Row::new().with("person_id", Value::Null);
    assert!(codec.identity_for_row(PERSON, &row).is_err());
}

#[test]
fn enum_read_back() {
    let mut classes = person();
    classes[0]
        .fields
        .push(field(PERSON, 3, "status", stmt::Type::Enum(status())));
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);
    let mut objects = Objects::new(&schema.app);

    let row = Row::new()
        .with("name", "erin")
        .with("age", Value::Null)
        .with("address_street", Value::Null)
        .with("status", 0);
    let state = codec.object_for_row(PERSON, &row, &mut objects).unwrap();

    assert_eq!(
        state.provide_field(3),
        Value::Enum(ValueEnum::from_name(&status(), "Active").unwrap())
    );

    let mut objects = Objects::new(&schema.app);
    let row = row.with("status", 5);
    let err = codec
        .object_for_row(PERSON, &row, &mut objects)
        .map(|_| ())
        .unwrap_err();
    assert!(err.is_type_conversion(), "{err}");
}

#[test]
fn wrong_column_kind_is_a_type_conversion_error() {
    let schema = build(person()).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);
    let mut objects = Objects::new(&schema.app);

    let row = Row::new()
        .with("name", "alice")
        .with("age", "thirty")
        .with("address_street", Value::Null);

    let err = codec
        .object_for_row(PERSON, &row, &mut objects)
        .map(|_| ())
        .unwrap_err();
    assert!(err.is_type_conversion(), "{err}");
}

#[test]
fn containers_round_trip() {
    let mut classes = person();
    classes[0].fields.extend([
        field(
            PERSON,
            3,
            "tags",
            FieldCollection::new(CollectionKind::List, Element::Value(stmt::Type::String)),
        ),
        field(
            PERSON,
            4,
            "lucky",
            FieldCollection::new(CollectionKind::Set, Element::Value(stmt::Type::I32)),
        ),
        field(
            PERSON,
            5,
            "scores",
            FieldMap::new(
                Element::Value(stmt::Type::String),
                Element::Value(stmt::Type::I32),
            ),
        ),
    ]);
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let tags = Value::List(vec![Value::from("a"), Value::from("b")]);
    let lucky = Value::List(vec![Value::I32(7), Value::I32(13)]);
    let scores = Value::Map(vec![(Value::from("math"), Value::I32(90))]);

    let mut object = alice(&schema)
        .with_field(3, tags.clone())
        .with_field(4, lucky.clone())
        .with_field(5, scores.clone());
    let values = codec.store_fields(&mut object, None).unwrap();
    assert_eq!(values["tags"], tags);

    let mut objects = Objects::new(&schema.app);
    let state = codec
        .object_for_row(PERSON, &stored_row(values), &mut objects)
        .unwrap();

    assert_eq!(state.provide_field(3), tags);
    assert_eq!(state.provide_field(4), lucky);
    assert_eq!(state.provide_field(5), scores);
}

#[test]
fn reference_round_trip() {
    let mut classes = person();
    classes[0]
        .fields
        .push(field(PERSON, 3, "friend", Reference::new(PERSON)));
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let friend = Value::Ref(ObjectRef::new("Person:bob"));
    let mut object = alice(&schema).with_field(3, friend.clone());
    let values = codec.store_fields(&mut object, None).unwrap();
    assert_eq!(values["friend"], Value::from("Person:bob"));

    let mut objects = Objects::new(&schema.app);
    let state = codec
        .object_for_row(PERSON, &stored_row(values), &mut objects)
        .unwrap();
    assert_eq!(state.provide_field(3), friend);
}

#[test]
fn serialized_field_round_trip() {
    let mut classes = person();
    let mut history = field(
        PERSON,
        3,
        "history",
        FieldCollection::new(CollectionKind::List, Element::Value(stmt::Type::String)),
    );
    history.serialized = true;
    classes[0].fields.push(history);
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let history = Value::List(vec![Value::from("joined"), Value::from("moved")]);
    let mut object = alice(&schema).with_field(3, history.clone());
    let values = codec.store_fields(&mut object, None).unwrap();
    assert!(matches!(values["history"], Value::Bytes(_)));

    let mut objects = Objects::new(&schema.app);
    let state = codec
        .object_for_row(PERSON, &stored_row(values), &mut objects)
        .unwrap();
    assert_eq!(state.provide_field(3), history);
}

#[test]
fn narrow_values_widened_into_bigint_columns() {
    let mut classes = person();
    classes[0].fields.push(field(
        PERSON,
        3,
        "rank",
        FieldPrimitive::with_storage_ty(stmt::Type::I16, db::Type::BigInt),
    ));
    classes[0].fields.push(field(
        PERSON,
        4,
        "status",
        FieldPrimitive::with_storage_ty(stmt::Type::Enum(status()), db::Type::BigInt),
    ));
    let schema = build(classes).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);

    let retired = Value::Enum(ValueEnum::from_name(&status(), "Retired").unwrap());
    let mut object = alice(&schema)
        .with_field(3, 12i16)
        .with_field(4, retired.clone());
    let values = codec.store_fields(&mut object, None).unwrap();

    assert_eq!(values["rank"], Value::I64(12));
    assert_eq!(values["status"], Value::I64(1));

    let row = stored_row(values);
    let mut objects = Objects::new(&schema.app);
    let state = codec.object_for_row(PERSON, &row, &mut objects).unwrap();
    assert_eq!(state.provide_field(3), Value::I16(12));
    assert_eq!(state.provide_field(4), retired);

    // Out of range for the declared type
    let row = row.with("rank", i64::from(i16::MAX) + 1);
    let mut objects = Objects::new(&schema.app);
    let err = codec
        .object_for_row(PERSON, &row, &mut objects)
        .map(|_| ())
        .unwrap_err();
    assert!(err.is_type_conversion(), "{err}");
}

#[test]
fn embeddable_class_cannot_be_read_from_a_row() {
    let schema = build(person()).unwrap();
    let converters = ConverterRegistry::default();
    let codec = Codec::new(&schema, &converters);
    let mut objects = Objects::new(&schema.app);

    let row = Row::new().with("street", "Main St");

    assert!(codec.identity_for_row(ADDRESS, &row).is_err());
    assert!(codec
        .object_for_row(ADDRESS, &row, &mut objects)
        .map(|_| ())
        .is_err());
    assert!(objects.is_empty());
}
