//! Layered variable resolution
//!
//! A [`VariableChain`] is an ordered list of lookup layers tried in sequence.
//! The base chain holds only the startup [`PropertyStore`]; a scoped chain
//! puts a per-call override map in front of it. Overrides always win and a
//! value is taken whole from the first layer that has it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use wiki_fs::PropertyStore;

/// Anything that can answer "what is the value of this variable?"
pub trait VariableSource: Send + Sync {
    fn find_variable(&self, name: &str) -> Option<String>;
}

impl VariableSource for PropertyStore {
    fn find_variable(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }
}

#[derive(Clone)]
enum Layer {
    Overrides(Arc<HashMap<String, String>>),
    Properties(Arc<PropertyStore>),
}

impl Layer {
    fn lookup(&self, name: &str) -> Option<&str> {
        match self {
            Layer::Overrides(map) => map.get(name).map(String::as_str),
            Layer::Properties(store) => store.get(name),
        }
    }
}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Overrides(map) => f.debug_tuple("Overrides").field(&map.len()).finish(),
            Layer::Properties(store) => f.debug_tuple("Properties").field(&store.len()).finish(),
        }
    }
}

/// Ordered lookup layers; the first layer holding a key answers for it.
///
/// Cloning is cheap: layers are shared behind `Arc`.
#[derive(Debug, Clone)]
pub struct VariableChain {
    layers: Vec<Layer>,
}

impl VariableChain {
    /// The default chain, resolving directly against the property store.
    pub fn system(properties: Arc<PropertyStore>) -> Self {
        Self {
            layers: vec![Layer::Properties(properties)],
        }
    }

    /// A new chain that checks `overrides` before everything in `self`.
    ///
    /// `self` is left untouched.
    pub fn scoped<I, K, V>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let overrides: HashMap<String, String> = overrides
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut layers = Vec::with_capacity(self.layers.len() + 1);
        layers.push(Layer::Overrides(Arc::new(overrides)));
        layers.extend(self.layers.iter().cloned());
        Self { layers }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.layers.iter().find_map(|layer| layer.lookup(name))
    }

    /// Number of layers, overrides included.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }
}

impl VariableSource for VariableChain {
    fn find_variable(&self, name: &str) -> Option<String> {
        self.lookup(name).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> VariableChain {
        let store: PropertyStore = [("a", "1")].into_iter().collect();
        VariableChain::system(Arc::new(store))
    }

    #[test]
    fn scoped_lookup_prefers_overrides() {
        let chain = base();
        let scoped = chain.scoped([("a", "2"), ("b", "3")]);

        assert_eq!(scoped.lookup("a"), Some("2"));
        assert_eq!(scoped.lookup("b"), Some("3"));
        assert_eq!(chain.lookup("a"), Some("1"));
        assert_eq!(chain.lookup("b"), None);
    }

    #[test]
    fn scoped_falls_back_to_store() {
        let scoped = base().scoped([("other", "x")]);
        assert_eq!(scoped.lookup("a"), Some("1"));
        assert_eq!(scoped.depth(), 2);
    }

    #[test]
    fn nested_scopes_resolve_innermost_first() {
        let outer = base().scoped([("a", "outer"), ("b", "outer")]);
        let inner = outer.scoped([("a", "inner")]);

        assert_eq!(inner.lookup("a"), Some("inner"));
        assert_eq!(inner.lookup("b"), Some("outer"));
        assert_eq!(inner.depth(), 3);
    }

    #[test]
    fn empty_override_value_still_wins() {
        let scoped = base().scoped([("a", "")]);
        assert_eq!(scoped.lookup("a"), Some(""));
    }

    #[test]
    fn property_store_is_a_variable_source() {
        let store: PropertyStore = [("k", "v")].into_iter().collect();
        assert_eq!(store.find_variable("k"), Some("v".to_string()));
        assert_eq!(store.find_variable("missing"), None);
    }
}
