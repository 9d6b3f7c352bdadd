use super::Builder;
use crate::{
    convert::{Converter, ConverterRegistry},
    schema::{
        app::{self, EmbedChain, IdentityKind, VersionStrategy},
        db::{self, Column, ColumnId, ColumnRole, Index, IndexOrigin, Table, TableId},
        mapping, resolve_column_type,
    },
    Error, Result,
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, warn};

const VERSION_COLUMN: &str = "version";
const DISCRIMINATOR_COLUMN: &str = "dtype";
const TENANT_COLUMN: &str = "tenant_id";

pub(super) struct BuildTable<'a> {
    builder: &'a Builder,
    app: &'a app::Schema,
    converters: &'a ConverterRegistry,
    class: &'a app::Class,
    root: &'a app::ClassRoot,
    table: Table,
    mapping: mapping::Class,
}

/// State shared by one recursive column expansion.
struct Expand<'a> {
    builder: &'a Builder,
    app: &'a app::Schema,
    converters: &'a ConverterRegistry,
    table: TableId,
}

pub(super) fn columns_for(
    builder: &Builder,
    app: &app::Schema,
    converters: &ConverterRegistry,
    table: TableId,
    chain: &EmbedChain,
) -> Result<Vec<Column>> {
    let Some(embedded) = chain
        .last()
        .and_then(|field| app.field(field).as_embedded())
    else {
        return Err(Error::invalid_schema(format!(
            "embed chain {chain:?} does not end at an embedded field"
        )));
    };

    let expand = Expand {
        builder,
        app,
        converters,
        table,
    };

    let mut columns = vec![];
    expand.push_columns(app.class(embedded.target), chain, &mut columns)?;
    Ok(columns)
}

impl<'a> BuildTable<'a> {
    pub(super) fn new(
        builder: &'a Builder,
        app: &'a app::Schema,
        converters: &'a ConverterRegistry,
        class: &'a app::Class,
        id: TableId,
    ) -> BuildTable<'a> {
        let root = class.expect_root();
        let name = root
            .table_name
            .clone()
            .unwrap_or_else(|| class.name.snake_case())
            .to_lowercase();
        let keyspace = root.keyspace.clone().or_else(|| builder.keyspace.clone());

        BuildTable {
            builder,
            app,
            converters,
            class,
            root,
            table: Table::new(id, name, keyspace),
            mapping: mapping::Class::new(class.id, id),
        }
    }

    pub(super) fn build(mut self) -> Result<(Table, mapping::Class)> {
        let expand = Expand {
            builder: self.builder,
            app: self.app,
            converters: self.converters,
            table: self.table.id,
        };

        let mut columns = vec![];
        expand.push_columns(self.class, &EmbedChain::default(), &mut columns)?;
        self.table.columns = columns;

        self.push_surrogate_columns();
        self.build_primary_key()?;
        self.verify_unique_column_names()?;
        self.build_field_indices();
        self.build_class_indices()?;

        for column in &self.table.columns {
            if let Some(chain) = column.chain() {
                self.mapping.columns.insert(chain.clone(), column.id);
            }
        }

        Ok((self.table, self.mapping))
    }

    fn push_surrogate_columns(&mut self) {
        if let Some(version) = &self.root.version {
            if version.field.is_none() {
                let ty = match version.strategy {
                    VersionStrategy::Number => db::Type::Int,
                    VersionStrategy::DateTime => db::Type::Timestamp,
                };
                self.mapping.version =
                    Some(self.push_column(VERSION_COLUMN.to_string(), ty, ColumnRole::Version));
            }
        }

        if let Some(discriminator) = &self.root.discriminator {
            let name = discriminator
                .column
                .as_deref()
                .unwrap_or(DISCRIMINATOR_COLUMN)
                .to_lowercase();
            self.mapping.discriminator =
                Some(self.push_column(name, db::Type::Varchar, ColumnRole::Discriminator));
        }

        if self.builder.multitenancy && !self.root.multitenancy_disabled {
            self.mapping.tenant = Some(self.push_column(
                TENANT_COLUMN.to_string(),
                db::Type::Varchar,
                ColumnRole::Tenant,
            ));
        }

        if self.root.identity == IdentityKind::Datastore {
            let name = format!("{}_id", self.table.name);
            self.mapping.datastore_id =
                Some(self.push_column(name, db::Type::BigInt, ColumnRole::DatastoreId));
        }
    }

    fn push_column(&mut self, name: String, ty: db::Type, role: ColumnRole) -> ColumnId {
        let id = ColumnId {
            table: self.table.id,
            index: self.table.columns.len(),
        };

        self.table.columns.push(Column {
            id,
            name,
            ty,
            converter: None,
            index: None,
            primary_key: false,
            role,
        });

        id
    }

    fn build_primary_key(&mut self) -> Result<()> {
        let class_name = self.class.name.upper_camel_case();

        let primary_key = match self.root.identity {
            IdentityKind::Datastore => self.mapping.datastore_id.into_iter().collect(),
            IdentityKind::Application => {
                let mut primary_key = vec![];

                for field in self.class.primary_key_fields() {
                    let chain = EmbedChain::root(field.id);
                    let Some(column) = self.table.column_for_chain(&chain) else {
                        return Err(Error::invalid_schema(format!(
                            "key field `{}` of class `{class_name}` is not stored in a single column",
                            field.name.app_name
                        )));
                    };
                    primary_key.push(column.id);
                }

                if primary_key.is_empty() {
                    return Err(Error::invalid_schema(format!(
                        "class `{class_name}` uses application identity but declares no key fields"
                    )));
                }

                primary_key
            }
            IdentityKind::None => {
                return Err(Error::invalid_schema(format!(
                    "class `{class_name}` has no identity; a table requires a primary key"
                )));
            }
        };

        for column_id in &primary_key {
            self.table.columns[column_id.index].primary_key = true;
        }
        self.table.primary_key = primary_key;

        Ok(())
    }

    fn verify_unique_column_names(&self) -> Result<()> {
        let mut seen = HashMap::<&str, &Column>::new();

        for column in &self.table.columns {
            if let Some(other) = seen.insert(&column.name, column) {
                return Err(Error::invalid_schema(format!(
                    "column `{}` of table `{}` is produced by both {} and {}",
                    column.name,
                    self.table.name,
                    self.describe(other),
                    self.describe(column),
                )));
            }
        }

        Ok(())
    }

    fn describe(&self, column: &Column) -> String {
        match column.chain() {
            Some(chain) => chain
                .resolve(self.app)
                .map(|field| field.name.app_name.as_str())
                .collect::<Vec<_>>()
                .join("."),
            None => format!("{:?} column", column.role),
        }
    }

    fn build_field_indices(&mut self) {
        for index in 0..self.table.columns.len() {
            let column = &self.table.columns[index];

            let ColumnRole::Field(chain) = &column.role else {
                continue;
            };
            let Some(field_index) = chain
                .last()
                .and_then(|id| self.app.field(id).index.as_ref())
            else {
                continue;
            };

            let name = field_index
                .name
                .clone()
                .unwrap_or_else(|| format!("{}_{}_idx", self.table.name, column.name));
            let column_id = column.id;

            self.push_index(name, column_id, IndexOrigin::Field);
        }
    }

    fn build_class_indices(&mut self) -> Result<()> {
        for (position, class_index) in self.root.indices.iter().enumerate() {
            let [column_name] = &class_index.columns[..] else {
                warn!(
                    table = %self.table.name,
                    columns = ?class_index.columns,
                    "multi-column indexes are not supported by the store; skipping"
                );
                continue;
            };

            let column = self
                .class
                .field_by_name(column_name)
                .and_then(|field| self.table.column_for_chain(&EmbedChain::root(field.id)))
                .or_else(|| self.table.column_by_name(column_name))
                .ok_or_else(|| {
                    Error::invalid_schema(format!(
                        "index on `{}` names unknown column `{column_name}`",
                        self.table.name
                    ))
                })?;

            if !column.is_physical() {
                warn!(
                    table = %self.table.name,
                    column = %column.name,
                    "column is not stored in the table; skipping class-level index"
                );
                continue;
            }

            if column.index.is_some() {
                debug!(
                    table = %self.table.name,
                    column = %column.name,
                    "column already indexed; skipping class-level index"
                );
                continue;
            }

            let column_id = column.id;
            let name = class_index
                .name
                .clone()
                .unwrap_or_else(|| format!("{}_idx{position}", self.table.name));

            self.push_index(name, column_id, IndexOrigin::Class);
        }

        Ok(())
    }

    fn push_index(&mut self, name: String, column: ColumnId, origin: IndexOrigin) {
        self.table.columns[column.index].index = Some(name.clone());
        self.table.indices.push(Index {
            name,
            column,
            origin,
        });
    }
}

impl Expand<'_> {
    /// Appends the columns of every field of `class`, reached through `chain`.
    fn push_columns(
        &self,
        class: &app::Class,
        chain: &EmbedChain,
        columns: &mut Vec<Column>,
    ) -> Result<()> {
        for field in &class.fields {
            if chain.is_owner_back_reference(self.app, field) {
                continue;
            }

            let field_chain = chain.with(field.id);

            if field.is_embedded() {
                let target = field.ty.expect_embedded().target;

                let recursive = chain
                    .resolve(self.app)
                    .filter_map(|enclosing| enclosing.as_embedded())
                    .any(|embedded| embedded.target == target)
                    || class.id == target;
                if recursive {
                    return Err(Error::invalid_schema(format!(
                        "field `{}` embeds its own enclosing class",
                        field.full_name(self.app)
                    )));
                }

                self.push_columns(self.app.class(target), &field_chain, columns)?;
            } else if field.is_embedded_container() {
                warn!(
                    field = %field.full_name(self.app),
                    "containers of embedded objects are not supported; field is not stored"
                );
                let role = ColumnRole::Placeholder(field_chain.clone());
                columns.push(self.column(
                    columns.len(),
                    &field_chain,
                    db::Type::Varchar,
                    None,
                    role,
                ));
            } else {
                let column_ty = resolve_column_type(field, self.converters);
                let role = ColumnRole::Field(field_chain.clone());
                columns.push(self.column(
                    columns.len(),
                    &field_chain,
                    column_ty.ty,
                    column_ty.converter,
                    role,
                ));
            }
        }

        Ok(())
    }

    fn column(
        &self,
        index: usize,
        chain: &EmbedChain,
        ty: db::Type,
        converter: Option<Arc<dyn Converter>>,
        role: ColumnRole,
    ) -> Column {
        Column {
            id: ColumnId {
                table: self.table,
                index,
            },
            name: self.column_name(chain),
            ty,
            converter,
            index: None,
            primary_key: false,
            role,
        }
    }

    /// Joins the storage names along the chain.
    fn column_name(&self, chain: &EmbedChain) -> String {
        chain
            .resolve(self.app)
            .map(|field| field.name.storage_name())
            .collect::<Vec<_>>()
            .join(self.builder.column_separator.as_str())
            .to_lowercase()
    }
}
