use super::Error;
use std::fmt;

/// One structural mismatch between the class model and the physical schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The table backing a class does not exist.
    MissingTable { class: String, table: String },

    /// A mapped column does not exist in the physical table.
    MissingColumn { table: String, column: String },

    /// The column exists but its physical type differs.
    TypeMismatch {
        table: String,
        column: String,
        expected: String,
        actual: String,
    },

    /// The physical table has columns the model does not produce.
    UnexpectedColumns {
        table: String,
        expected: usize,
        actual: usize,
        columns: Vec<String>,
    },

    /// A declared index has no indexed physical column.
    MissingIndex {
        table: String,
        column: String,
        index: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingTable { class, table } => {
                write!(f, "table `{table}` for class `{class}` does not exist")
            }
            ValidationIssue::MissingColumn { table, column } => {
                write!(f, "table `{table}` is missing column `{column}`")
            }
            ValidationIssue::TypeMismatch {
                table,
                column,
                expected,
                actual,
            } => write!(
                f,
                "column `{table}.{column}` has type `{actual}` but the model expects `{expected}`"
            ),
            ValidationIssue::UnexpectedColumns {
                table,
                expected,
                actual,
                columns,
            } => write!(
                f,
                "table `{table}` has {actual} columns but the model expects {expected} (unexpected: {})",
                columns.join(", ")
            ),
            ValidationIssue::MissingIndex {
                table,
                column,
                index,
            } => write!(
                f,
                "index `{index}` on `{table}.{column}` does not exist"
            ),
        }
    }
}

/// Every issue found by one validation call.
#[derive(Debug)]
pub(super) struct SchemaValidationError {
    issues: Vec<ValidationIssue>,
}

impl std::error::Error for SchemaValidationError {}

impl fmt::Display for SchemaValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema validation failed with {} issue(s)", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "; {issue}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates the aggregate validation failure for a batch of classes.
    pub fn schema_validation(issues: Vec<ValidationIssue>) -> Error {
        Error::from(super::ErrorKind::SchemaValidation(SchemaValidationError {
            issues,
        }))
    }

    /// Returns `true` if this error is a schema validation failure.
    pub fn is_schema_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaValidation(_))
    }

    /// The issues carried by a schema validation failure.
    pub fn validation_issues(&self) -> &[ValidationIssue] {
        match self.kind() {
            super::ErrorKind::SchemaValidation(err) => &err.issues,
            _ => &[],
        }
    }
}
