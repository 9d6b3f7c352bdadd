use super::ColumnId;

/// A single-column secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    pub name: String,

    /// Indexed column
    pub column: ColumnId,

    pub origin: IndexOrigin,
}

/// Where the index was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrigin {
    Field,
    Class,
}
