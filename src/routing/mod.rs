//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request
//!     → http layer extracts model identifier (body or query)
//!     → table.rs (RouteTable lookup by model name)
//!     → Return: matched Upstream or explicit miss
//!
//! Table Construction (at startup):
//!     model configuration string
//!     → config::parse_model_config
//!     → name → Upstream entries
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Shared via Arc; unsynchronized concurrent reads are safe
//! - O(1) lookup via HashMap
//! - Explicit miss (None) rather than silent default backend

pub mod table;

pub use table::{RouteTable, Upstream};
