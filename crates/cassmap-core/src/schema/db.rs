//! Physical tables, columns and introspection results.

mod column;
pub use column::{Column, ColumnId, ColumnRole};

mod index;
pub use index::{Index, IndexOrigin};

mod schema;
pub use schema::Schema;

mod snapshot;
pub use snapshot::{SnapshotColumn, TableSnapshot};

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::Type;
