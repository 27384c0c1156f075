//! Tri-modal navigation state for a session.

use serde::{Deserialize, Serialize};

/// Which of the three tabs is active.
///
/// Exactly one mode is active at any time. Transitions are user-initiated
/// tab selections, with one programmatic exception handled by the session
/// orchestrator: the saved view's empty-state action jumps to `Create`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveMode {
    /// Single-run form.
    Create,
    /// Batch input submission. Initial mode of every session.
    #[default]
    Batch,
    /// Browsing previously saved outputs.
    Saved,
}

impl ActiveMode {
    /// Stable identifier used for logging and serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Batch => "batch",
            Self::Saved => "saved",
        }
    }
}

impl std::fmt::Display for ActiveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
