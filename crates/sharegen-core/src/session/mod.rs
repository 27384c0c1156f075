//! Session domain module.
//!
//! # Module Structure
//!
//! - `context`: the ready-to-render session context (`SessionContext`)
//! - `mode`: tri-modal navigation state (`ActiveMode`)
//! - `inputs`: visitor-entered form values (`FormInputs`)

mod context;
mod inputs;
mod mode;

pub use context::{AppAccess, InstalledApp, MoreLikeThisConfig, SessionContext};
pub use inputs::FormInputs;
pub use mode::ActiveMode;
