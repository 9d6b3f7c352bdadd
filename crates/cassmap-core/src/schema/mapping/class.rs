use crate::schema::{
    app::{ClassId, EmbedChain},
    db::{ColumnId, TableId},
};
use std::collections::HashMap;

/// Where the values of one class live in its table.
#[derive(Debug, Clone)]
pub struct Class {
    pub id: ClassId,

    /// Table the class is stored in
    pub table: TableId,

    /// Column of every mapped field chain, placeholders included
    pub columns: HashMap<EmbedChain, ColumnId>,

    /// Surrogate identity column
    pub datastore_id: Option<ColumnId>,

    /// Surrogate version column
    pub version: Option<ColumnId>,

    pub discriminator: Option<ColumnId>,

    pub tenant: Option<ColumnId>,
}

impl Class {
    pub fn new(id: ClassId, table: TableId) -> Class {
        Class {
            id,
            table,
            columns: HashMap::new(),
            datastore_id: None,
            version: None,
            discriminator: None,
            tenant: None,
        }
    }

    pub fn column(&self, chain: &EmbedChain) -> Option<ColumnId> {
        self.columns.get(chain).copied()
    }
}
