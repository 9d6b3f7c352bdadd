mod support;
use support::*;

use cassmap::{Config, Operation};
use pretty_assertions::assert_eq;
use std::fs;

#[tokio::test]
async fn writes_ddl_instead_of_executing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ddl").join("schema.cql");

    let store = Store::new();
    let mut config = Config::new("app");
    config.ddl_file(&path);
    let handler = handler(&store, config);
    let schema = build(&handler, indexed_person_classes());

    handler
        .run(Operation::Create, &schema, &[PERSON])
        .await
        .unwrap();

    let script = fs::read_to_string(&path).unwrap();
    let lines = script.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "------------------------------------------------------------------");
    assert!(lines[1].starts_with("-- cassmap SchemaTool (ran at "), "{}", lines[1]);
    assert_eq!(lines[2], lines[0]);
    assert_eq!(
        &lines[3..],
        [
            "CREATE TABLE app.person (name varchar, age int, address_street varchar, PRIMARY KEY (name));",
            "CREATE INDEX person_age_idx ON app.person (age);",
        ]
    );

    // Introspection still runs against the store
    assert!(store.ddl().is_empty());
    assert!(!store.executed().is_empty());
    assert_eq!(store.open_connections(), 0);
}

#[tokio::test]
async fn replaces_existing_script() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.cql");
    fs::write(&path, "stale contents\n").unwrap();

    let store = Store::new().with_table("app", "person", &person_table_columns());
    let mut config = Config::new("app");
    config.ddl_file(&path);
    let handler = handler(&store, config);
    let schema = build(&handler, person_classes());

    handler.delete_schema(&schema, &[PERSON]).await.unwrap();

    let script = fs::read_to_string(&path).unwrap();
    assert!(!script.contains("stale"));
    assert!(script.ends_with("DROP TABLE app.person;\n"), "{script}");
}

#[tokio::test]
async fn unopenable_script_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let store = Store::new();
    let mut config = Config::new("app");
    config.ddl_file(blocker.join("schema.cql"));
    let handler = handler(&store, config);
    let schema = build(&handler, person_classes());

    let err = handler.create_schema(&schema, &[PERSON]).await.unwrap_err();

    assert!(err.is_io(), "{err}");
    assert!(store.executed().is_empty());
    assert_eq!(store.open_connections(), 0);
}
