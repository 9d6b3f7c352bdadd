mod support;
use support::*;

use cassmap_core::{
    schema::{
        app::{CollectionKind, Element, FieldCollection, FieldIndex},
        db::TableSnapshot,
        validate::validate_table,
    },
    ValidationIssue,
};
use pretty_assertions::assert_eq;

fn person_snapshot() -> TableSnapshot {
    TableSnapshot::new()
        .with_column("name", "text")
        .with_column("age", "int")
        .with_column("address_street", "varchar")
}

#[test]
fn missing_table() {
    let schema = build(person()).unwrap();

    let issues = validate_table("Person", schema.table_for(PERSON), None);

    assert_eq!(
        issues,
        [ValidationIssue::MissingTable {
            class: "Person".to_string(),
            table: "app.person".to_string(),
        }]
    );
}

#[test]
fn column_names_ignore_case() {
    let schema = build(person()).unwrap();
    let snapshot = TableSnapshot::new()
        .with_column("Name", "varchar")
        .with_column("AGE", "int")
        .with_column("Address_Street", "varchar");

    assert!(validate_table("Person", schema.table_for(PERSON), Some(&snapshot)).is_empty());
}

#[test]
fn placeholders_are_not_checked() {
    let mut classes = person();
    classes[0].fields.push(field(
        PERSON,
        3,
        "previous",
        FieldCollection::new(CollectionKind::Set, Element::Embedded(ADDRESS)),
    ));
    let schema = build(classes).unwrap();

    let issues = validate_table("Person", schema.table_for(PERSON), Some(&person_snapshot()));
    assert!(issues.is_empty(), "{issues:?}");

    // A physical column named like the placeholder is unexpected
    let snapshot = person_snapshot().with_column("previous", "varchar");
    let issues = validate_table("Person", schema.table_for(PERSON), Some(&snapshot));
    assert_eq!(
        issues,
        [ValidationIssue::UnexpectedColumns {
            table: "person".to_string(),
            expected: 3,
            actual: 4,
            columns: vec!["previous".to_string()],
        }]
    );
}

#[test]
fn every_issue_is_reported() {
    let mut classes = person();
    classes[0].fields[1].index = Some(FieldIndex::default());
    let schema = build(classes).unwrap();
    let snapshot = TableSnapshot::new()
        .with_column("name", "bigint")
        .with_column("age", "int");

    let issues = validate_table("Person", schema.table_for(PERSON), Some(&snapshot));

    assert_eq!(
        issues,
        [
            ValidationIssue::TypeMismatch {
                table: "person".to_string(),
                column: "name".to_string(),
                expected: "varchar".to_string(),
                actual: "bigint".to_string(),
            },
            ValidationIssue::MissingColumn {
                table: "person".to_string(),
                column: "address_street".to_string(),
            },
            ValidationIssue::MissingIndex {
                table: "person".to_string(),
                column: "age".to_string(),
                index: "person_age_idx".to_string(),
            },
        ]
    );
}

#[test]
fn index_on_missing_column_is_reported_once() {
    let mut classes = person();
    classes[1].fields[0].index = Some(FieldIndex::default());
    let schema = build(classes).unwrap();
    let snapshot = TableSnapshot::new()
        .with_column("name", "varchar")
        .with_column("age", "int");

    let issues = validate_table("Person", schema.table_for(PERSON), Some(&snapshot));

    assert_eq!(
        issues,
        [ValidationIssue::MissingColumn {
            table: "person".to_string(),
            column: "address_street".to_string(),
        }]
    );
}

#[test]
fn collection_types_compare_canonically() {
    let mut classes = person();
    classes[0].fields.push(field(
        PERSON,
        3,
        "tags",
        FieldCollection::new(CollectionKind::Set, Element::Value(cassmap_core::stmt::Type::String)),
    ));
    let schema = build(classes).unwrap();

    let snapshot = person_snapshot().with_column("tags", "frozen<set<text>>");
    assert!(validate_table("Person", schema.table_for(PERSON), Some(&snapshot)).is_empty());

    let snapshot = person_snapshot().with_column("tags", "list<text>");
    let issues = validate_table("Person", schema.table_for(PERSON), Some(&snapshot));
    assert_eq!(
        issues,
        [ValidationIssue::TypeMismatch {
            table: "person".to_string(),
            column: "tags".to_string(),
            expected: "set<varchar>".to_string(),
            actual: "list<varchar>".to_string(),
        }]
    );
}
