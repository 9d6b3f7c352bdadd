use super::Error;
use std::{error::Error as StdError, fmt, iter};

type BoxError = Box<dyn StdError + Send + Sync>;

/// A statement the connection layer failed to execute.
#[derive(Debug)]
pub(super) struct DriverError {
    cause: BoxError,
}

impl DriverError {
    /// The cause followed by each of its sources.
    fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        let first: &(dyn StdError + 'static) = self.cause.as_ref();
        iter::successors(Some(first), |err| (*err).source())
    }
}

impl StdError for DriverError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.causes().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a failure reported by a [`Connection`](crate::Connection).
    ///
    /// Execution failures are not retried. They end the statements of the
    /// class being processed.
    pub fn driver(err: impl StdError + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Driver(DriverError {
            cause: Box::new(err),
        }))
    }

    pub fn is_driver(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Driver(_))
    }
}
