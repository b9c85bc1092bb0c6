//! Server configuration.

/// Address the server binds to unless `LABKIT_BIND_ADDR` says otherwise.
pub const DEFAULT_BIND_ADDR: &str = "localhost:8000";

/// Environment variable overriding [`DEFAULT_BIND_ADDR`].
pub const BIND_ADDR_ENV: &str = "LABKIT_BIND_ADDR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `host:port`, resolved at bind time.
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. An empty value counts as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(BIND_ADDR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(bind_addr) => Self {
                bind_addr: bind_addr.trim().to_string(),
            },
            None => {
                tracing::info!("{BIND_ADDR_ENV} not set; using {DEFAULT_BIND_ADDR}");
                Self::default()
            }
        }
    }
}
