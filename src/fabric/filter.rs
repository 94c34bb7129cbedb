use std::collections::HashSet;

use crate::utils::select::Select;

/// Whether a [`DeviceFilter`]'s name set includes or excludes candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Include,
    Exclude,
}

/// Administrator include/exclude list, applied to a candidate's `Name`.
///
/// An empty `Include` set means "no restriction", not "nothing included" —
/// callers should not invert this.
#[derive(Debug, Clone)]
pub struct DeviceFilter {
    mode: FilterMode,
    names: HashSet<String>,
}

impl DeviceFilter {
    pub fn new(names: impl IntoIterator<Item = String>, mode: FilterMode) -> Self {
        Self {
            mode,
            names: names.into_iter().collect(),
        }
    }

    /// Does this filter accept a candidate with the given interface name?
    pub fn accepts(&self, name: &str) -> bool {
        let in_set = self.names.contains(name);
        (self.mode == FilterMode::Include).select_val(self.names.is_empty() || in_set, !in_set)
    }
}

impl Default for DeviceFilter {
    /// The default filter is an empty exclude list: accept everything.
    fn default() -> Self {
        Self::new(std::iter::empty(), FilterMode::Exclude)
    }
}
