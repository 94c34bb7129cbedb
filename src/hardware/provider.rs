use std::collections::HashSet;

/// A single fabric transport label, e.g. `ofi+sockets`, `ofi+verbs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FabricProvider {
    pub name: String,
}

impl FabricProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The set of providers a hardware device supports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FabricProviderSet(HashSet<String>);

impl FabricProviderSet {
    pub fn new(providers: impl IntoIterator<Item = FabricProvider>) -> Self {
        Self(providers.into_iter().map(|p| p.name).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

impl FromIterator<&'static str> for FabricProviderSet {
    fn from_iter<T: IntoIterator<Item = &'static str>>(iter: T) -> Self {
        Self(iter.into_iter().map(str::to_owned).collect())
    }
}
