//! Model-aware reverse proxy router library.

pub mod config;
pub mod http;
pub mod routing;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use routing::RouteTable;
