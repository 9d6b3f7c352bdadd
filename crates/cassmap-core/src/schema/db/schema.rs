use super::{Table, TableId};

#[derive(Debug, Default)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn table(&self, id: impl Into<TableId>) -> &Table {
        &self.tables[id.into().0]
    }
}
