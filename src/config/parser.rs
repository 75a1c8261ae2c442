//! Model configuration string parsing.
//!
//! # Responsibilities
//! - Split `name_port,name_port,...` into segments
//! - Validate each segment (exactly one `_`, non-empty parts, numeric port)
//! - Build the immutable RouteTable
//!
//! # Design Decisions
//! - Any invalid segment aborts parsing; no partial table is ever returned
//! - An empty string is one invalid segment, so "no backends" fails startup
//! - Duplicate names are a hard error, not last-write-wins

use std::collections::HashMap;

use thiserror::Error;

use crate::routing::{RouteTable, Upstream};

/// Error type for model configuration parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Segment does not split into `name_port`.
    #[error("invalid model configuration: {0}")]
    InvalidSegment(String),

    /// Port part is not a valid TCP port.
    #[error("invalid port in model configuration: {0}")]
    InvalidPort(String),

    /// Model name appears more than once.
    #[error("duplicate model name in configuration: {0}")]
    DuplicateModel(String),
}

/// Parse a model configuration string into a route table.
///
/// Each comma-separated segment has the form `name_port` and maps `name`
/// to `http://localhost:<port>`. Logs one line per mapping created.
pub fn parse_model_config(spec: &str) -> Result<RouteTable, ConfigError> {
    let mut targets = HashMap::new();

    for segment in spec.split(',') {
        let (name, port) = match segment.split_once('_') {
            Some((name, port))
                if !name.is_empty() && !port.is_empty() && !port.contains('_') =>
            {
                (name, port)
            }
            _ => return Err(ConfigError::InvalidSegment(segment.to_string())),
        };

        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(segment.to_string()))?;

        tracing::info!(model = %name, port, "Routing model to backend");

        if targets
            .insert(name.to_string(), Upstream::localhost(port))
            .is_some()
        {
            return Err(ConfigError::DuplicateModel(name.to_string()));
        }
    }

    Ok(RouteTable::new(targets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_model() {
        let table = parse_model_config("gpt_9001").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("gpt").unwrap().authority(), "localhost:9001");
    }

    #[test]
    fn test_parse_multiple_models() {
        let table = parse_model_config("gpt_9001,llama_9002,mistral_9003").unwrap();
        assert_eq!(table.len(), 3);
        let mut names: Vec<_> = table.models().collect();
        names.sort();
        assert_eq!(names, vec!["gpt", "llama", "mistral"]);
        assert_eq!(
            table.lookup("mistral").unwrap().authority(),
            "localhost:9003"
        );
    }

    #[test]
    fn test_reject_segment_without_underscore() {
        assert!(matches!(
            parse_model_config("foo"),
            Err(ConfigError::InvalidSegment(s)) if s == "foo"
        ));
    }

    #[test]
    fn test_reject_segment_with_multiple_underscores() {
        assert!(matches!(
            parse_model_config("a_b_c"),
            Err(ConfigError::InvalidSegment(s)) if s == "a_b_c"
        ));
    }

    #[test]
    fn test_reject_empty_string() {
        // "" is one segment with no underscore, not an empty table.
        assert!(matches!(
            parse_model_config(""),
            Err(ConfigError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_reject_empty_name_or_port() {
        assert!(parse_model_config("_9001").is_err());
        assert!(parse_model_config("gpt_").is_err());
    }

    #[test]
    fn test_reject_trailing_comma() {
        assert!(parse_model_config("gpt_9001,").is_err());
    }

    #[test]
    fn test_reject_non_numeric_port() {
        assert!(matches!(
            parse_model_config("gpt_http"),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_reject_duplicate_model() {
        assert!(matches!(
            parse_model_config("gpt_9001,gpt_9002"),
            Err(ConfigError::DuplicateModel(name)) if name == "gpt"
        ));
    }

    #[test]
    fn test_one_bad_segment_fails_whole_config() {
        assert!(parse_model_config("gpt_9001,bad,llama_9002").is_err());
    }
}
