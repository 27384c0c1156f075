//! Infrastructure layer for Sharegen.
//!
//! Concrete implementations of the domain seams: the HTTP Remote Gateway,
//! its environment-based configuration, and a tracing-backed notifier.

pub mod config;
pub mod http_gateway;
pub mod notifier;

pub use config::GatewayConfig;
pub use http_gateway::HttpRemoteGateway;
pub use notifier::TracingNotifier;
