use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vessel issued by the vessel-allocation service
///
/// VesselId wraps the opaque string handed out by the collaborator to provide
/// type safety and prevent mixing it up with other strings on a consignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VesselId(String);

impl VesselId {
    /// Create a VesselId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id means the collaborator returned a zero-value vessel
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VesselId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VesselId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<VesselId> for String {
    fn from(id: VesselId) -> Self {
        id.0
    }
}
