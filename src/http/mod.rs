//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, the two entry routes)
//!     → extract.rs (model identifier from body or query)
//!     → routing layer decides the upstream
//!     → proxy.rs (forward to backend, stream response back)
//!     → response.rs (JSON error envelope on any failure)
//! ```

pub mod extract;
pub mod proxy;
pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::HttpServer;
