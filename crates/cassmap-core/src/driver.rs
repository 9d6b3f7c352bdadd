mod prepared;
pub use prepared::Prepared;

mod response;
pub use response::Response;

mod row;
pub use row::Row;

use crate::{async_trait, stmt::Value, Result};

use std::fmt::Debug;

/// Hands out sessions against the store.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Acquire a session for the duration of one schema operation.
    ///
    /// The session is released when the returned value is dropped.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A session executing one statement at a time.
#[async_trait]
pub trait Connection: Debug + Send {
    /// Execute a statement, binding `params` to its `?` placeholders.
    async fn execute(&mut self, cql: &str, params: &[Value]) -> Result<Response>;

    /// Prepare a statement for repeated execution.
    async fn prepare(&mut self, cql: &str) -> Result<Prepared>;

    async fn execute_prepared(&mut self, prepared: &Prepared, params: &[Value]) -> Result<Response>;
}
