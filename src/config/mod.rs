//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (-l port, -m model string)
//!     → schema.rs (RouterConfig)
//!     → parser.rs (parse model string, validate segments)
//!     → RouteTable (validated, immutable)
//!     → shared via Arc to all request handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; changes require a restart
//! - A malformed model string is fatal: the process never serves with a
//!   partially built table
//! - Duplicate model names are rejected rather than silently overwritten

pub mod parser;
pub mod schema;

pub use parser::{parse_model_config, ConfigError};
pub use schema::RouterConfig;
