use super::{Field, FieldId, Schema};
use std::fmt;

/// Fields from the outermost embedded field down to the field being mapped.
///
/// A chain identifies one column of a table: it is the lookup key of the
/// class mapping and the source of the column name. Root fields have a
/// chain of length one.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct EmbedChain(Vec<FieldId>);

impl EmbedChain {
    pub fn root(field: FieldId) -> EmbedChain {
        EmbedChain(vec![field])
    }

    /// Returns a new chain extended by `field`.
    pub fn with(&self, field: FieldId) -> EmbedChain {
        let mut fields = self.0.clone();
        fields.push(field);
        EmbedChain(fields)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<FieldId> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<FieldId> {
        self.0.last().copied()
    }

    pub fn fields(&self) -> &[FieldId] {
        &self.0
    }

    /// Resolves each link to its field.
    pub fn resolve<'a>(&'a self, schema: &'a Schema) -> impl Iterator<Item = &'a Field> + 'a {
        self.0.iter().map(|id| schema.field(*id))
    }

    /// True when `field`, reached through this chain, is the owner
    /// back-reference declared by the sole enclosing composite.
    pub fn is_owner_back_reference(&self, schema: &Schema, field: &Field) -> bool {
        let [outer] = self.0[..] else {
            return false;
        };

        schema
            .field(outer)
            .as_embedded()
            .and_then(|embedded| embedded.owner_field_name(schema))
            .is_some_and(|owner| owner == field.name.app_name)
    }
}

impl FromIterator<FieldId> for EmbedChain {
    fn from_iter<T: IntoIterator<Item = FieldId>>(iter: T) -> Self {
        EmbedChain(iter.into_iter().collect())
    }
}

impl fmt::Debug for EmbedChain {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(&self.0).finish()
    }
}
