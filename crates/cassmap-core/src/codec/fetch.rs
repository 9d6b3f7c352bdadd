use super::Codec;
use crate::{
    driver::Row,
    runtime::{ExecutionContext, Identity, ObjectState},
    schema::{
        app::{self, ClassId, EmbedChain, IdentityKind},
        db::Table,
    },
    stmt::{ObjectRef, Value, ValueRecord},
    Error, Result,
};

impl Codec<'_> {
    /// Finds or reconstructs the object stored in `row`.
    ///
    /// A reconstructed object has all its fields loaded from the row. The
    /// version is restored from the version field or the surrogate version
    /// column.
    pub fn object_for_row<'c>(
        &self,
        class: ClassId,
        row: &Row,
        cx: &'c mut dyn ExecutionContext,
    ) -> Result<&'c mut dyn ObjectState> {
        let identity = self.identity_for_row(class, row)?;

        let state = cx.find_object(class, identity, &mut |state: &mut dyn ObjectState| {
            self.fetch_fields(state, row)
        })?;

        let (_, root) = self.root_class(class)?;
        if let Some(version) = &root.version {
            let value = match version.field {
                Some(field) => state.provide_field(field.index),
                None => match self.schema.mapping_for(class).version {
                    Some(column) => {
                        let column = self.schema.table_for(class).column(column);
                        row.get_typed(&column.name, &column.ty)?
                    }
                    None => Value::Null,
                },
            };

            if !value.is_null() {
                state.set_version(value);
            }
        }

        Ok(state)
    }

    /// Identity of the object stored in `row`.
    pub fn identity_for_row(&self, class: ClassId, row: &Row) -> Result<Identity> {
        let (app_class, root) = self.root_class(class)?;
        let table = self.schema.table_for(class);
        let class_name = app_class.name.upper_camel_case();

        match root.identity {
            IdentityKind::Datastore => {
                let column = self
                    .schema
                    .mapping_for(class)
                    .datastore_id
                    .map(|column| table.column(column))
                    .ok_or_else(|| err!("class `{class_name}` has no identity column"))?;

                row.get_long(&column.name)?
                    .map(Identity::Datastore)
                    .ok_or_else(|| err!("row of `{class_name}` has a null `{}`", column.name))
            }
            IdentityKind::Application => {
                let mut key = vec![];

                for field in app_class.primary_key_fields() {
                    let column = table
                        .column_for_chain(&EmbedChain::root(field.id))
                        .ok_or_else(|| err!("key field `{}` has no column", field.name.app_name))?;
                    key.push(self.read_column(field, column, row)?);
                }

                Ok(Identity::Application(key))
            }
            IdentityKind::None => Err(Error::invalid_schema(format!(
                "class `{class_name}` has no identity"
            ))),
        }
    }

    fn root_class(&self, class: ClassId) -> Result<(&app::Class, &app::ClassRoot)> {
        let app_class = self.schema.app.class(class);
        match app_class.as_root() {
            Some(root) => Ok((app_class, root)),
            None => bail!(
                "class `{}` is embeddable and has no table",
                app_class.name.upper_camel_case()
            ),
        }
    }

    /// Loads every mapped field of the object's class from `row`.
    ///
    /// Placeholder fields are left untouched. Embedded fields receive a
    /// [`Value::Record`], or null when all their columns are null.
    pub fn fetch_fields(&self, state: &mut dyn ObjectState, row: &Row) -> Result<()> {
        let (class, _) = self.root_class(state.class())?;
        let table = self.schema.table_for(class.id);
        let owner = state.object_ref();
        let chain = EmbedChain::default();

        for field in &class.fields {
            if let Some(value) = self.fetch_field(field, &chain, table, &owner, row)? {
                state.replace_field(field.id.index, value);
            }
        }

        Ok(())
    }

    /// `None` for fields without a physical column.
    fn fetch_field(
        &self,
        field: &app::Field,
        chain: &EmbedChain,
        table: &Table,
        owner: &ObjectRef,
        row: &Row,
    ) -> Result<Option<Value>> {
        let field_chain = chain.with(field.id);

        if field.is_embedded() {
            let target = self.schema.app.class(field.ty.expect_embedded().target);
            return self
                .fetch_embedded(target, &field_chain, table, owner, row)
                .map(Some);
        }

        match table.column_for_chain(&field_chain) {
            Some(column) if column.is_physical() => self.read_column(field, column, row).map(Some),
            _ => Ok(None),
        }
    }

    fn fetch_embedded(
        &self,
        class: &app::Class,
        chain: &EmbedChain,
        table: &Table,
        owner: &ObjectRef,
        row: &Row,
    ) -> Result<Value> {
        let mut fields = Vec::with_capacity(class.fields.len());
        let mut owner_field = None;

        for field in &class.fields {
            if chain.is_owner_back_reference(&self.schema.app, field) {
                owner_field = Some(field.id.index);
                fields.push(Value::Null);
                continue;
            }

            let value = self.fetch_field(field, chain, table, owner, row)?;
            fields.push(value.unwrap_or_default());
        }

        let mut record = ValueRecord::from_vec(fields);
        if record.is_all_null() {
            return Ok(Value::Null);
        }

        if let Some(index) = owner_field {
            record[index] = Value::Ref(owner.clone());
        }

        Ok(Value::Record(record))
    }
}
