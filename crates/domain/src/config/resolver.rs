use serde::{Deserialize, Serialize};

/// Settings for the per-domain system resolver file (`/etc/resolver/<domain>`
/// on macOS) that routes lookups for the internal suffix to this server.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u32,

    #[serde(default = "default_search_order")]
    pub search_order: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            domain: default_domain(),
            timeout_secs: default_timeout_secs(),
            search_order: default_search_order(),
        }
    }
}

fn default_path() -> String {
    "/etc/resolver/internal".to_string()
}

fn default_domain() -> String {
    "internal".to_string()
}

fn default_timeout_secs() -> u32 {
    1
}

fn default_search_order() -> u32 {
    1
}
