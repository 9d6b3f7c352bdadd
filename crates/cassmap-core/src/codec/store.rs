use super::Codec;
use crate::{
    runtime::{Identity, ObjectState},
    schema::{
        app::{self, EmbedChain},
        db::{self, Table},
    },
    stmt::Value,
    Error, Result,
};
use indexmap::IndexMap;
use tracing::debug;

impl Codec<'_> {
    /// Column values of `state`, in table column order.
    ///
    /// Every column of the table gets an entry, including surrogate columns
    /// the class uses. Columns of an absent composite are explicitly null.
    /// `tenant` fills the multitenancy column.
    pub fn store_fields(
        &self,
        state: &mut dyn ObjectState,
        tenant: Option<&str>,
    ) -> Result<IndexMap<String, Value>> {
        let class = self.schema.app.class(state.class());
        let Some(root) = class.as_root() else {
            bail!(
                "class `{}` is embeddable and has no table",
                class.name.upper_camel_case()
            );
        };
        let mapping = self.schema.mapping_for(class.id);
        let table = self.schema.table_for(class.id);

        let mut values = IndexMap::new();
        self.store_class(class, &EmbedChain::default(), state, table, &mut values)?;

        if let Some(column) = mapping.version {
            let column = table.column(column);
            let version = state.version().unwrap_or_default();
            values.insert(
                column.name.clone(),
                self.write_surrogate(&column.ty, version)?,
            );
        }

        if let (Some(column), Some(discriminator)) = (mapping.discriminator, &root.discriminator) {
            values.insert(
                table.column(column).name.clone(),
                Value::String(discriminator.value.clone()),
            );
        }

        if let Some(column) = mapping.tenant {
            values.insert(table.column(column).name.clone(), tenant.into());
        }

        if let Some(column) = mapping.datastore_id {
            let id = match state.identity() {
                Some(Identity::Datastore(id)) => Value::I64(id),
                _ => Value::Null,
            };
            values.insert(table.column(column).name.clone(), id);
        }

        let mut ordered = IndexMap::with_capacity(values.len());
        for column in &table.columns {
            if let Some(value) = values.swap_remove(&column.name) {
                ordered.insert(column.name.clone(), value);
            }
        }

        Ok(ordered)
    }

    /// Writes every field of `class` reached through `chain`.
    fn store_class(
        &self,
        class: &app::Class,
        chain: &EmbedChain,
        state: &mut dyn ObjectState,
        table: &Table,
        values: &mut IndexMap<String, Value>,
    ) -> Result<()> {
        for field in &class.fields {
            let index = field.id.index;

            if chain.is_owner_back_reference(&self.schema.app, field) {
                repair_owner(state, field);
                continue;
            }

            let field_chain = chain.with(field.id);

            if field.is_embedded() {
                let target = self.schema.app.class(field.ty.expect_embedded().target);

                match state.embedded(index) {
                    Some(embedded) => {
                        self.store_class(target, &field_chain, embedded, table, values)?
                    }
                    None => self.store_nulls(target, &field_chain, table, values),
                }
                continue;
            }

            let Some(column) = table.column_for_chain(&field_chain) else {
                continue;
            };

            let value = if column.is_physical() {
                self.write_column(field, column, state.provide_field(index))?
            } else {
                Value::Null
            };
            values.insert(column.name.clone(), value);
        }

        Ok(())
    }

    /// Nulls every column of an absent composite, recursing through nested
    /// composites.
    fn store_nulls(
        &self,
        class: &app::Class,
        chain: &EmbedChain,
        table: &Table,
        values: &mut IndexMap<String, Value>,
    ) {
        for field in &class.fields {
            if chain.is_owner_back_reference(&self.schema.app, field) {
                continue;
            }

            let field_chain = chain.with(field.id);

            if field.is_embedded() {
                let target = self.schema.app.class(field.ty.expect_embedded().target);
                self.store_nulls(target, &field_chain, table, values);
            } else if let Some(column) = table.column_for_chain(&field_chain) {
                values.insert(column.name.clone(), Value::Null);
            }
        }
    }

    fn write_surrogate(&self, ty: &db::Type, value: Value) -> Result<Value> {
        Ok(match (ty, value) {
            (db::Type::Int, Value::I64(v)) => i32::try_from(v)
                .map(Value::I32)
                .map_err(|_| Error::type_conversion(Value::I64(v), "I32"))?,
            (db::Type::BigInt, Value::I32(v)) => Value::I64(v.into()),
            (_, value) => value,
        })
    }
}

/// Points the owner back-reference of an embedded object at its owner.
fn repair_owner(state: &mut dyn ObjectState, field: &app::Field) {
    let owners = state.embedded_owners();
    let [owner] = &owners[..] else {
        return;
    };

    let owner = Value::Ref(owner.clone());
    let index = field.id.index;

    if state.provide_field(index) != owner {
        debug!(field = %field.name.app_name, ?owner, "repairing owner back-reference");
        state.replace_field(index, owner);
    }
}
