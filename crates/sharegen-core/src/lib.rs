//! Domain layer for Sharegen session orchestration.
//!
//! Everything in this crate is transport-free: the Remote Gateway and the
//! notification subsystem are traits implemented elsewhere, and the state
//! machines (mode, trigger, presentation) are plain event-driven types.

pub mod error;
pub mod gateway;
pub mod locale;
pub mod notify;
pub mod presentation;
pub mod prompt;
pub mod saved;
pub mod session;
pub mod site;
pub mod trigger;

// Re-export common error type
pub use error::{Result, SharegenError};
