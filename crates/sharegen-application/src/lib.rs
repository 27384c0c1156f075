//! Application layer for Sharegen.
//!
//! This crate provides the use-case implementations that coordinate the
//! domain and infrastructure layers: the session initializer, the
//! saved-items service, and the per-visitor session orchestrator.

pub mod initializer;
pub mod saved_items;
pub mod session;

pub use initializer::SessionInitializer;
pub use saved_items::SavedItemsService;
pub use session::GenerationSession;
