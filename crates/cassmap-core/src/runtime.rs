//! Interface to the object runtime that owns identity, field state and
//! versions of managed objects.

mod identity;
pub use identity::Identity;

mod object;
pub use object::{Object, Objects};

use crate::{schema::app::ClassId, stmt::{ObjectRef, Value}, Result};

/// Field level access to one managed object, or to a composite held by one.
///
/// Fields are addressed by their index in the class declaration.
pub trait ObjectState {
    fn class(&self) -> ClassId;

    /// Identity handle, stored by references to this object.
    fn object_ref(&self) -> ObjectRef;

    /// Current value of a field.
    fn provide_field(&self, field: usize) -> Value;

    fn replace_field(&mut self, field: usize, value: Value);

    /// State of the composite held in an embedded field, if the field is set.
    fn embedded(&mut self, field: usize) -> Option<&mut dyn ObjectState>;

    /// Objects embedding this one.
    fn embedded_owners(&self) -> Vec<ObjectRef>;

    fn version(&self) -> Option<Value>;

    fn set_version(&mut self, version: Value);

    /// `None` until the object has an identity.
    fn identity(&self) -> Option<Identity>;
}

/// Tracks the objects of one session.
pub trait ExecutionContext {
    /// Returns the managed object with `identity`, reconstructing it when it
    /// is not yet managed. `load` populates a reconstructed object's fields.
    fn find_object(
        &mut self,
        class: ClassId,
        identity: Identity,
        load: &mut dyn FnMut(&mut dyn ObjectState) -> Result<()>,
    ) -> Result<&mut dyn ObjectState>;
}
