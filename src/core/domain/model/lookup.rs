//! Search keys for resources that can be found either by name or by identifier.

/// Locates a resource by its human-readable name or by its server identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Match on the `name` attribute.
    Name(&'a str),
    /// Match on the resource identifier (`project_id`, `node_id`, ...).
    Id(&'a str),
}

impl Lookup<'_> {
    /// Returns true if the given name/identifier pair satisfies this lookup.
    pub fn matches(&self, name: Option<&str>, id: Option<&str>) -> bool {
        match self {
            Lookup::Name(wanted) => name == Some(*wanted),
            Lookup::Id(wanted) => id == Some(*wanted),
        }
    }
}

impl std::fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lookup::Name(name) => write!(f, "name '{}'", name),
            Lookup::Id(id) => write!(f, "id '{}'", id),
        }
    }
}
