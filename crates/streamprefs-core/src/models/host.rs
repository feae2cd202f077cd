//! Host model

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A streaming host known to the client.
///
/// Two hosts are the same host when their ids match; the display name is
/// not part of the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    id: String,
    name: String,
}

impl Host {
    /// Create a host record
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Stable host identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Host {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Host {}

impl Hash for Host {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Which host, if any, the settings profile currently belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HostSelection {
    #[default]
    NoSelection,
    Selected(Host),
}

impl HostSelection {
    /// The selected host, if any
    pub const fn host(&self) -> Option<&Host> {
        match self {
            Self::NoSelection => None,
            Self::Selected(host) => Some(host),
        }
    }

    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn hosts_compare_by_id_only() {
        let a = Host::new("abc", "Living Room");
        let b = Host::new("abc", "Renamed PC");
        let c = Host::new("def", "Living Room");

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Host> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn selection_exposes_host() {
        let selection = HostSelection::Selected(Host::new("abc", "Desk"));
        assert!(selection.is_selected());
        assert_eq!(selection.host().map(Host::id), Some("abc"));
        assert_eq!(HostSelection::default().host(), None);
    }
}
