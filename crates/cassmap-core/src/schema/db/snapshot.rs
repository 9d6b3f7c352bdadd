use super::Type;
use indexmap::IndexMap;

/// Physical state of one table as reported by the store.
///
/// Fetched fresh for every synchronization or validation call. Column names
/// are lower-cased, matching the store's folding of unquoted identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSnapshot {
    columns: IndexMap<String, SnapshotColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotColumn {
    /// Canonical physical type name, or the raw name if it is not recognized
    pub ty: String,

    /// Name of the index on the column
    pub index: Option<String>,
}

impl TableSnapshot {
    pub fn new() -> TableSnapshot {
        TableSnapshot::default()
    }

    /// Records a column. The type name is canonicalized when recognized.
    pub fn insert_column(&mut self, name: &str, ty: &str) {
        let ty = ty
            .parse::<Type>()
            .ok()
            .or_else(|| Type::from_validator(ty))
            .map(|ty| ty.to_string())
            .unwrap_or_else(|| ty.to_string());

        let column = self
            .columns
            .entry(name.to_lowercase())
            .or_insert(SnapshotColumn { ty: String::new(), index: None });
        column.ty = ty;
    }

    /// Records an index on a column already inserted.
    pub fn insert_index(&mut self, column: &str, index: &str) {
        if let Some(column) = self.columns.get_mut(&column.to_lowercase()) {
            column.index = Some(index.to_string());
        }
    }

    pub fn with_column(mut self, name: &str, ty: &str) -> TableSnapshot {
        self.insert_column(name, ty);
        self
    }

    pub fn with_index(mut self, column: &str, index: &str) -> TableSnapshot {
        self.insert_index(column, index);
        self
    }

    pub fn column(&self, name: &str) -> Option<&SnapshotColumn> {
        self.columns.get(&name.to_lowercase())
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn is_indexed(&self, name: &str) -> bool {
        self.column(name).is_some_and(|column| column.index.is_some())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
