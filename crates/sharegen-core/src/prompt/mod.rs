//! Prompt configuration domain module.
//!
//! Contains the raw input-form schema served by the Remote Gateway and the
//! derived, render-ready prompt variable model.
//!
//! # Module Structure
//!
//! - `form`: raw `user_input_form` wire schema (`UserInputField`)
//! - `variable`: derived model (`PromptConfig`, `VariableSpec`, `VariableKind`)

mod form;
mod variable;

pub use form::{FieldSpec, SelectFieldSpec, UserInputField};
pub use variable::{PromptConfig, VariableKind, VariableSpec};
