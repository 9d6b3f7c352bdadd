mod adhoc;
mod driver;
mod invalid_schema;
mod io;
mod schema_validation;
mod type_conversion;

use adhoc::AdhocError;
use driver::DriverError;
use invalid_schema::InvalidSchemaError;
use io::IoError;
use schema_validation::SchemaValidationError;
use std::sync::Arc;
use type_conversion::TypeConversionError;

pub use schema_validation::ValidationIssue;

/// An error that can occur while mapping or synchronizing a schema.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) => inner.kind,
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Driver(DriverError),
    InvalidSchema(InvalidSchemaError),
    Io(IoError),
    SchemaValidation(SchemaValidationError),
    TypeConversion(TypeConversionError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InvalidSchema(err) => core::fmt::Display::fmt(err, f),
            Io(err) => core::fmt::Display::fmt(err, f),
            SchemaValidation(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown cassmap error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<jiff::Error> for Error {
    fn from(err: jiff::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let chained = root.context(err!("creating table")).context(err!("class Person"));

        assert_eq!(
            chained.to_string(),
            "class Person: creating table: root cause"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(err.to_string(), "something failed");
    }

    #[test]
    fn invalid_schema_with_context() {
        let err = Error::invalid_schema("duplicate column `address_street`")
            .context(err!("building table `person`"));

        assert!(!err.is_invalid_schema());
        assert_eq!(
            err.to_string(),
            "building table `person`: invalid schema: duplicate column `address_street`"
        );
    }

    #[test]
    fn driver_error_lists_sources() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err = Error::driver(io);

        assert!(err.is_driver());
        assert_eq!(err.to_string(), "reset by peer");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn driver_error_displays_nested_sources() {
        #[derive(Debug)]
        struct Rejected(std::io::Error);

        impl core::fmt::Display for Rejected {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                f.write_str("statement rejected")
            }
        }

        impl std::error::Error for Rejected {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let err = Error::driver(Rejected(io)).context(err!("creating table `person`"));

        assert!(!err.is_driver());
        assert_eq!(
            err.to_string(),
            "creating table `person`: statement rejected: reset by peer"
        );
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(crate::stmt::Value::I64(42), "Bool");
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert I64 to Bool");
    }
}
