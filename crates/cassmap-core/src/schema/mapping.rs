//! Maps classes and their field chains onto table columns.

mod class;
pub use class::Class;

use super::app::ClassId;
use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Mapping {
    /// Mapping of each root class
    pub classes: IndexMap<ClassId, Class>,
}

impl Mapping {
    pub fn class(&self, id: impl Into<ClassId>) -> &Class {
        self.classes.get(&id.into()).expect("invalid class ID")
    }

    pub fn class_mut(&mut self, id: impl Into<ClassId>) -> &mut Class {
        self.classes.get_mut(&id.into()).expect("invalid class ID")
    }
}
