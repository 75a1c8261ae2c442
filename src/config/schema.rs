//! Configuration schema definitions.

/// Root configuration for the model router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Port to listen on.
    pub listen_port: String,

    /// Model configuration string: `name_port,name_port,...`.
    pub model_spec: String,

    /// Maximum request body size in bytes.
    ///
    /// Bodies are buffered in full for model extraction, so this bounds
    /// per-request memory. Oversized bodies fail as a body read error.
    pub max_body_bytes: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            listen_port: "8087".to_string(),
            model_spec: String::new(),
            max_body_bytes: 2 * 1024 * 1024, // 2MB
        }
    }
}

impl RouterConfig {
    /// Address the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.listen_port)
    }
}
