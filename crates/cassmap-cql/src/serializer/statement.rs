use super::{Comma, Ident, Params, ToCql};

use crate::stmt::{self, Statement};

impl ToCql for &Statement {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::AddColumn(stmt) => stmt.to_cql(f),
            Statement::CreateIndex(stmt) => stmt.to_cql(f),
            Statement::CreateKeyspace(stmt) => stmt.to_cql(f),
            Statement::CreateTable(stmt) => stmt.to_cql(f),
            Statement::DropIndex(stmt) => stmt.to_cql(f),
            Statement::DropKeyspace(stmt) => stmt.to_cql(f),
            Statement::DropTable(stmt) => stmt.to_cql(f),
            Statement::Select(stmt) => stmt.to_cql(f),
        }
    }
}

impl ToCql for &stmt::CreateKeyspace {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let durable_writes = if self.durable_writes {
            ""
        } else {
            " AND durable_writes=false"
        };

        let name = &self.name;
        let replication = &self.replication;

        fmt!(
            f, "CREATE KEYSPACE IF NOT EXISTS " name " WITH replication = " replication durable_writes
        );
    }
}

impl ToCql for &stmt::DropKeyspace {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        let name = &self.name;

        fmt!(f, "DROP KEYSPACE " if_exists name);
    }
}

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToCql for &stmt::CreateTable {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = &self.name;
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE " name " (" columns ")");
    }
}

impl ToCql for ColumnsWithConstraints<'_> {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(&self.0.columns);

        if self.0.primary_key.is_empty() {
            fmt!(f, columns);
        } else {
            let primary_key = Comma(self.0.primary_key.iter().map(Ident));
            fmt!(f, columns ", PRIMARY KEY (" primary_key ")");
        }
    }
}

impl ToCql for &stmt::AddColumn {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let column = &self.column;

        fmt!(f, "ALTER TABLE " table " ADD " column);
    }
}

impl ToCql for &stmt::CreateIndex {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let index_name = Ident(&self.name);
        let table = &self.on;
        let column = Ident(&self.column);

        fmt!(f, "CREATE INDEX " index_name " ON " table " (" column ")");
    }
}

impl ToCql for &stmt::DropIndex {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        let name = &self.name;

        fmt!(f, "DROP INDEX " if_exists name);
    }
}

impl ToCql for &stmt::DropTable {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        let name = &self.name;

        fmt!(f, "DROP TABLE " if_exists name);
    }
}

struct Filter<'a>(&'a [(String, stmt::Value)]);

impl ToCql for &stmt::Select {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Comma(self.columns.iter().map(Ident));

        let from = &self.from;

        fmt!(f, "SELECT " columns " FROM " from);

        if !self.filter.is_empty() {
            let filter = Filter(&self.filter);
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToCql for Filter<'_> {
    fn to_cql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let mut s = "";
        for (column, value) in self.0 {
            let placeholder = f.params.push(value);
            let column = Ident(column);
            fmt!(f, s column "=" placeholder);
            s = " AND ";
        }
    }
}
