pub mod app;

mod builder;
pub use builder::Builder;

pub mod db;

pub mod mapping;
use mapping::Mapping;

mod name;
pub use name::Name;

mod resolve;
pub use resolve::{fallback_rules, resolve_column_type, ColumnType, FallbackRule};

pub mod validate;

use app::ClassId;
use db::{Table, TableId};

/// A class model together with the tables it maps onto.
#[derive(Debug)]
pub struct Schema {
    /// Logical class model
    pub app: app::Schema,

    /// Physical tables derived from the class model
    pub db: db::Schema,

    /// Maps the class model to the tables
    pub mapping: Mapping,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn mapping_for(&self, id: impl Into<ClassId>) -> &mapping::Class {
        self.mapping.class(id)
    }

    pub fn table_for(&self, id: impl Into<ClassId>) -> &Table {
        self.db.table(self.table_id_for(id))
    }

    pub fn table_id_for(&self, id: impl Into<ClassId>) -> TableId {
        self.mapping.class(id).table
    }
}
