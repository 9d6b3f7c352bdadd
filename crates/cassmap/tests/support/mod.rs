#![allow(dead_code)]

use cassmap::{
    async_trait,
    driver::{Prepared, Response, Row},
    err,
    schema::{
        app::{
            Class, ClassId, ClassKind, ClassRoot, Embedded, Field, FieldIndex, IdentityKind,
            Reference,
        },
        Name,
    },
    stmt::{self, Value},
    Config, Connection, Driver, Result, Schema, SchemaHandler,
};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

pub const PERSON: ClassId = ClassId(0);
pub const ADDRESS: ClassId = ClassId(1);

/// In-memory stand-in for the store.
///
/// Records every statement, answers introspection queries from a fake
/// catalog and counts open connections.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: Arc<Mutex<State>>,
    open: Arc<AtomicUsize>,
}

#[derive(Debug, Default)]
struct State {
    executed: Vec<String>,
    catalog: HashMap<(String, String), CatalogTable>,
    fail_on: Option<String>,
    connects: usize,
}

#[derive(Debug, Default)]
struct CatalogTable {
    columns: Vec<(String, String)>,

    /// Index name and target
    indexes: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct RecordingDriver {
    store: Store,
}

#[derive(Debug)]
pub struct RecordingConnection {
    store: Store,
    prepared: u64,
}

impl Store {
    pub fn new() -> Store {
        Store::default()
    }

    pub fn driver(&self) -> RecordingDriver {
        RecordingDriver {
            store: self.clone(),
        }
    }

    pub fn with_table(self, keyspace: &str, table: &str, columns: &[(&str, &str)]) -> Store {
        {
            let mut state = self.state.lock().unwrap();
            let entry = state
                .catalog
                .entry((keyspace.to_string(), table.to_string()))
                .or_default();
            entry.columns = columns
                .iter()
                .map(|(name, ty)| (name.to_string(), ty.to_string()))
                .collect();
        }
        self
    }

    pub fn with_index(self, keyspace: &str, table: &str, index: &str, target: &str) -> Store {
        {
            let mut state = self.state.lock().unwrap();
            state
                .catalog
                .entry((keyspace.to_string(), table.to_string()))
                .or_default()
                .indexes
                .push((index.to_string(), target.to_string()));
        }
        self
    }

    /// Fails every statement containing `fragment`.
    pub fn fail_on(&self, fragment: &str) {
        self.state.lock().unwrap().fail_on = Some(fragment.to_string());
    }

    /// Every statement received, introspection included.
    pub fn executed(&self) -> Vec<String> {
        self.state.lock().unwrap().executed.clone()
    }

    /// Statements other than introspection queries.
    pub fn ddl(&self) -> Vec<String> {
        self.executed()
            .into_iter()
            .filter(|cql| !cql.starts_with("SELECT"))
            .collect()
    }

    pub fn open_connections(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    pub fn connects(&self) -> usize {
        self.state.lock().unwrap().connects
    }
}

#[async_trait]
impl Driver for RecordingDriver {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        self.store.state.lock().unwrap().connects += 1;
        self.store.open.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(RecordingConnection {
            store: self.store.clone(),
            prepared: 0,
        }))
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn execute(&mut self, cql: &str, params: &[Value]) -> Result<Response> {
        let mut state = self.store.state.lock().unwrap();
        state.executed.push(cql.to_string());

        if let Some(fragment) = &state.fail_on {
            if cql.contains(fragment.as_str()) {
                return Err(err!("injected failure"));
            }
        }

        if !cql.starts_with("SELECT") {
            return Ok(Response::Applied);
        }

        let key = match params {
            [Value::String(keyspace), Value::String(table)] => (keyspace.clone(), table.clone()),
            _ => return Err(err!("unexpected introspection params {params:?}")),
        };

        let Some(table) = state.catalog.get(&key) else {
            return Ok(Response::rows(vec![]));
        };

        let rows = if cql.contains("system_schema.tables") {
            vec![Row::new().with("table_name", key.1.as_str())]
        } else if cql.contains("system_schema.columns") {
            table
                .columns
                .iter()
                .map(|(name, ty)| {
                    Row::new()
                        .with("column_name", name.as_str())
                        .with("type", ty.as_str())
                })
                .collect()
        } else if cql.contains("system_schema.indexes") {
            table
                .indexes
                .iter()
                .map(|(name, target)| {
                    let options = Value::Map(vec![
                        (Value::from("class_name"), Value::from("")),
                        (Value::from("target"), Value::from(target.as_str())),
                    ]);
                    Row::new()
                        .with("index_name", name.as_str())
                        .with("options", options)
                })
                .collect()
        } else {
            return Err(err!("unexpected query `{cql}`"));
        };

        Ok(Response::rows(rows))
    }

    async fn prepare(&mut self, cql: &str) -> Result<Prepared> {
        self.prepared += 1;
        Ok(Prepared::new(self.prepared, cql))
    }

    async fn execute_prepared(
        &mut self,
        prepared: &Prepared,
        params: &[Value],
    ) -> Result<Response> {
        let cql = prepared.cql.clone();
        self.execute(&cql, params).await
    }
}

impl Drop for RecordingConnection {
    fn drop(&mut self) {
        self.store.open.fetch_sub(1, Ordering::SeqCst);
    }
}

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

/// `Person { name (key), age, address: Address { street, owner } }`, where
/// `owner` points back at the embedding person.
pub fn person_classes() -> Vec<Class> {
    let mut name = Field::new(PERSON.field(0), "name", stmt::Type::String);
    name.primary_key = true;

    let age = Field::new(PERSON.field(1), "age", stmt::Type::I32);
    let address = Field::new(PERSON.field(2), "address", Embedded::new(ADDRESS));

    let street = Field::new(ADDRESS.field(0), "street", stmt::Type::String);
    let mut owner = Field::new(ADDRESS.field(1), "owner", Reference::new(PERSON));
    owner.owner_link = true;

    vec![
        Class {
            id: PERSON,
            name: Name::new("Person"),
            fields: vec![name, age, address],
            kind: ClassKind::Root(root(IdentityKind::Application)),
        },
        Class {
            id: ADDRESS,
            name: Name::new("Address"),
            fields: vec![street, owner],
            kind: ClassKind::Embeddable,
        },
    ]
}

/// Person with an index on `age`.
pub fn indexed_person_classes() -> Vec<Class> {
    let mut classes = person_classes();
    classes[0].fields[1].index = Some(FieldIndex::default());
    classes
}

pub fn root_mut(class: &mut Class) -> &mut ClassRoot {
    match &mut class.kind {
        ClassKind::Root(root) => root,
        ClassKind::Embeddable => panic!("expected root class"),
    }
}

pub fn handler(store: &Store, config: Config) -> SchemaHandler {
    SchemaHandler::new(store.driver(), config)
}

pub fn build(handler: &SchemaHandler, classes: Vec<Class>) -> Schema {
    let app = cassmap::schema::app::Schema::from_classes(classes).unwrap();
    handler.build_schema(app).unwrap()
}

pub fn person_table_columns() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "text"),
        ("age", "int"),
        ("address_street", "text"),
    ]
}
