//! Immutable model name → upstream mapping.

use std::collections::HashMap;

/// A backend target for a single model.
///
/// Backends are always co-located on the local host; only the port varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    authority: String,
}

impl Upstream {
    /// Create an upstream pointing at `http://localhost:<port>`.
    pub fn localhost(port: u16) -> Self {
        Self {
            authority: format!("localhost:{}", port),
        }
    }

    /// The `host:port` authority of this upstream.
    pub fn authority(&self) -> &str {
        &self.authority
    }
}

/// Mapping from model name to its backend target.
///
/// Built once at startup by [`crate::config::parse_model_config`] and never
/// mutated afterwards, so it is shared across request tasks without locking.
#[derive(Debug, Default)]
pub struct RouteTable {
    targets: HashMap<String, Upstream>,
}

impl RouteTable {
    pub fn new(targets: HashMap<String, Upstream>) -> Self {
        Self { targets }
    }

    /// Look up the upstream for a model name.
    ///
    /// The empty identifier never matches: keys are non-empty by
    /// construction.
    pub fn lookup(&self, model: &str) -> Option<&Upstream> {
        self.targets.get(model)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate over the configured model names.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, u16)]) -> RouteTable {
        RouteTable::new(
            entries
                .iter()
                .map(|(name, port)| (name.to_string(), Upstream::localhost(*port)))
                .collect(),
        )
    }

    #[test]
    fn test_lookup_hit() {
        let table = table(&[("gpt", 9001), ("llama", 9002)]);
        assert_eq!(table.lookup("gpt"), Some(&Upstream::localhost(9001)));
        assert_eq!(table.lookup("llama"), Some(&Upstream::localhost(9002)));
    }

    #[test]
    fn test_lookup_miss() {
        let table = table(&[("gpt", 9001)]);
        assert_eq!(table.lookup("mistral"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = table(&[("gpt", 9001)]);
        assert_eq!(table.lookup("GPT"), None);
    }

    #[test]
    fn test_upstream_authority() {
        assert_eq!(Upstream::localhost(8080).authority(), "localhost:8080");
    }
}
