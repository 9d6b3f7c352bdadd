#![allow(dead_code)]

use cassmap_core::{
    schema::{
        app::{
            Class, ClassId, ClassKind, ClassRoot, Embedded, Field, FieldTy, IdentityKind,
            Reference, Schema as AppSchema,
        },
        Builder, Name,
    },
    stmt, ConverterRegistry, Result, Schema,
};

pub const PERSON: ClassId = ClassId(0);
pub const ADDRESS: ClassId = ClassId(1);

pub fn root(identity: IdentityKind) -> ClassRoot {
    ClassRoot {
        identity,
        table_name: None,
        keyspace: None,
        version: None,
        discriminator: None,
        indices: vec![],
        multitenancy_disabled: false,
    }
}

pub fn root_class(id: ClassId, name: &str, fields: Vec<Field>) -> Class {
    Class {
        id,
        name: Name::new(name),
        fields,
        kind: ClassKind::Root(root(IdentityKind::Application)),
    }
}

pub fn embeddable(id: ClassId, name: &str, fields: Vec<Field>) -> Class {
    Class {
        id,
        name: Name::new(name),
        fields,
        kind: ClassKind::Embeddable,
    }
}

pub fn field(class: ClassId, index: usize, name: &str, ty: impl Into<FieldTy>) -> Field {
    Field::new(class.field(index), name, ty)
}

pub fn key(mut field: Field) -> Field {
    field.primary_key = true;
    field
}

pub fn root_mut(class: &mut Class) -> &mut ClassRoot {
    match &mut class.kind {
        ClassKind::Root(root) => root,
        ClassKind::Embeddable => panic!("expected root class"),
    }
}

/// `Person { name (key), age, address: Address { street, owner } }`
pub fn person() -> Vec<Class> {
    let mut owner = field(ADDRESS, 1, "owner", Reference::new(PERSON));
    owner.owner_link = true;

    vec![
        root_class(
            PERSON,
            "Person",
            vec![
                key(field(PERSON, 0, "name", stmt::Type::String)),
                field(PERSON, 1, "age", stmt::Type::I32),
                field(PERSON, 2, "address", Embedded::new(ADDRESS)),
            ],
        ),
        embeddable(
            ADDRESS,
            "Address",
            vec![field(ADDRESS, 0, "street", stmt::Type::String), owner],
        ),
    ]
}

pub fn build(classes: Vec<Class>) -> Result<Schema> {
    build_with(&ConverterRegistry::default(), classes)
}

pub fn build_with(converters: &ConverterRegistry, classes: Vec<Class>) -> Result<Schema> {
    let app = AppSchema::from_classes(classes)?;
    Builder::new().keyspace("app").build(app, converters)
}

/// Names of the table's columns, placeholders included.
pub fn column_names(schema: &Schema, class: ClassId) -> Vec<String> {
    schema
        .table_for(class)
        .columns
        .iter()
        .map(|column| column.name.clone())
        .collect()
}
