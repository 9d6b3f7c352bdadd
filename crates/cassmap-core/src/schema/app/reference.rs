use super::ClassId;

/// A single-valued reference to another persisted object.
#[derive(Debug, Clone)]
pub struct Reference {
    pub target: ClassId,
}

impl Reference {
    pub fn new(target: ClassId) -> Reference {
        Reference { target }
    }
}
