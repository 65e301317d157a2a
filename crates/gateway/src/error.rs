use thiserror::Error;

/// The two resources the catalog service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Categories,
    Products,
}

impl Resource {
    /// Path segment under the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Categories => "categories",
            Resource::Products => "products",
        }
    }
}

impl core::fmt::Display for Resource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("network error fetching {resource}: {message}")]
    Network { resource: Resource, message: String },
    #[error("API error fetching {resource} ({status}): {body}")]
    Api {
        resource: Resource,
        status: u16,
        body: String,
    },
    #[error("parse error fetching {resource}: {message}")]
    Parse { resource: Resource, message: String },
}

impl GatewayError {
    pub fn resource(&self) -> Resource {
        match self {
            GatewayError::Network { resource, .. }
            | GatewayError::Api { resource, .. }
            | GatewayError::Parse { resource, .. } => *resource,
        }
    }
}
