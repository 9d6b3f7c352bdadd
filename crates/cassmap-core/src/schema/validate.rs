//! Compares a table derived from the class model with the table the store
//! reports.

use super::db::{Table, TableSnapshot};
use crate::ValidationIssue;
use tracing::error;

/// Returns every mismatch between `table` and its physical state.
///
/// `snapshot` is `None` when the table does not exist. Column names compare
/// case-insensitively; type names must be equal after canonicalization.
/// Placeholder columns are not physical and never checked.
pub fn validate_table(
    class: &str,
    table: &Table,
    snapshot: Option<&TableSnapshot>,
) -> Vec<ValidationIssue> {
    let mut issues = vec![];

    let Some(snapshot) = snapshot else {
        issues.push(ValidationIssue::MissingTable {
            class: class.to_string(),
            table: table.qualified_name(),
        });
        return report(issues);
    };

    let mut expected = 0;

    for column in table.physical_columns() {
        expected += 1;

        let Some(actual) = snapshot.column(&column.name) else {
            issues.push(ValidationIssue::MissingColumn {
                table: table.name.clone(),
                column: column.name.clone(),
            });
            continue;
        };

        let expected_ty = column.ty.to_string();
        if actual.ty != expected_ty {
            issues.push(ValidationIssue::TypeMismatch {
                table: table.name.clone(),
                column: column.name.clone(),
                expected: expected_ty,
                actual: actual.ty.clone(),
            });
        }
    }

    if snapshot.len() != expected {
        let unexpected = snapshot
            .column_names()
            .filter(|name| {
                !matches!(table.column_by_name(name), Some(column) if column.is_physical())
            })
            .map(str::to_string)
            .collect::<Vec<_>>();

        if !unexpected.is_empty() {
            issues.push(ValidationIssue::UnexpectedColumns {
                table: table.name.clone(),
                expected,
                actual: snapshot.len(),
                columns: unexpected,
            });
        }
    }

    for index in &table.indices {
        let column = table.column(index.column);

        if snapshot.contains_column(&column.name) && !snapshot.is_indexed(&column.name) {
            issues.push(ValidationIssue::MissingIndex {
                table: table.name.clone(),
                column: column.name.clone(),
                index: index.name.clone(),
            });
        }
    }

    report(issues)
}

fn report(issues: Vec<ValidationIssue>) -> Vec<ValidationIssue> {
    for issue in &issues {
        error!("{issue}");
    }
    issues
}
