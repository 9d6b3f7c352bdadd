use super::{builtin, Converter, Repr, SerializedConverter};
use crate::stmt::Type;
use indexmap::IndexMap;
use std::{collections::HashMap, sync::Arc};

/// Converters known to the mapping layer.
///
/// Lookups are by converter name (explicit field converters), by declared
/// type (auto-apply converters), and by declared type plus representation.
#[derive(Debug, Clone)]
pub struct ConverterRegistry {
    by_name: IndexMap<String, Arc<dyn Converter>>,
    by_type: HashMap<(String, Repr), Arc<dyn Converter>>,
    auto_apply: HashMap<String, Arc<dyn Converter>>,
    serialized: Arc<dyn Converter>,
}

impl ConverterRegistry {
    /// A registry holding only the serialization converter.
    pub fn empty() -> ConverterRegistry {
        ConverterRegistry {
            by_name: IndexMap::new(),
            by_type: HashMap::new(),
            auto_apply: HashMap::new(),
            serialized: Arc::new(SerializedConverter),
        }
    }

    /// Registers a converter, replacing any with the same name or the same
    /// declared type and representation.
    pub fn register(&mut self, converter: Arc<dyn Converter>) -> &mut Self {
        self.by_type.insert(
            (converter.member_type().to_string(), converter.repr()),
            converter.clone(),
        );
        self.by_name.insert(converter.name().to_string(), converter);
        self
    }

    /// Registers a converter applied to every field of its declared type
    /// that does not name a converter.
    pub fn register_auto_apply(&mut self, converter: Arc<dyn Converter>) -> &mut Self {
        self.auto_apply
            .insert(converter.member_type().to_string(), converter.clone());
        self.register(converter)
    }

    pub fn by_name(&self, name: &str) -> Option<&Arc<dyn Converter>> {
        self.by_name.get(name)
    }

    pub fn auto_apply(&self, ty: &Type) -> Option<&Arc<dyn Converter>> {
        self.auto_apply.get(ty.name())
    }

    /// Converter from `ty` to the given representation.
    pub fn find(&self, ty: &Type, repr: Repr) -> Option<&Arc<dyn Converter>> {
        self.by_type.get(&(ty.name().to_string(), repr))
    }

    /// Converter storing any serializable value as bytes.
    pub fn serialized(&self) -> &Arc<dyn Converter> {
        &self.serialized
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_name.keys().map(String::as_str)
    }
}

impl Default for ConverterRegistry {
    /// The registry with every built-in converter.
    fn default() -> ConverterRegistry {
        let mut registry = ConverterRegistry::empty();

        for converter in builtin::converters() {
            registry.register(Arc::new(converter));
        }

        registry
    }
}
