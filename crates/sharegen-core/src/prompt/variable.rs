//! Derived prompt configuration.
//!
//! The render layer never touches the raw form schema; it works with
//! `PromptConfig`, whose variable list is derived once from the schema with
//! field order preserved (the order defines both the form layout and the
//! batch-run column order).

use serde::{Deserialize, Serialize};

use super::form::UserInputField;

/// Prompt configuration shared by the create, batch and result views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PromptConfig {
    /// The app's prompt template. The share surface currently receives an
    /// empty template; the field exists so the config view can render it
    /// when the app makes the prompt public.
    pub prompt_template: String,
    /// Declared input variables, in schema order.
    pub prompt_variables: Vec<VariableSpec>,
}

impl PromptConfig {
    /// Builds a prompt config from the raw `user_input_form` schema.
    ///
    /// One `VariableSpec` per form field, order preserved.
    pub fn from_form(form: &[UserInputField]) -> Self {
        Self {
            prompt_template: String::new(),
            prompt_variables: form.iter().map(VariableSpec::from_field).collect(),
        }
    }
}

/// One declared input variable of the prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableSpec {
    /// Variable key used in the prompt template and in `FormInputs`.
    pub key: String,
    /// Display label.
    pub name: String,
    /// Whether the visitor must provide a value.
    pub required: bool,
    /// Control kind plus kind-specific constraints.
    pub kind: VariableKind,
}

/// The control kind a variable renders as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VariableKind {
    /// Single-line text, optionally length-limited.
    Text { max_length: Option<u32> },
    /// Multi-line text.
    Paragraph,
    /// Fixed option list.
    Select { options: Vec<String> },
    /// Numeric value.
    Number,
}

impl VariableSpec {
    fn from_field(field: &UserInputField) -> Self {
        let spec = field.spec();
        let kind = match field {
            UserInputField::TextInput(spec) => VariableKind::Text {
                max_length: spec.max_length,
            },
            UserInputField::Paragraph(_) => VariableKind::Paragraph,
            UserInputField::Select(select) => VariableKind::Select {
                options: select.options.clone(),
            },
            UserInputField::Number(_) => VariableKind::Number,
        };
        Self {
            key: spec.variable.clone(),
            name: spec.label.clone(),
            required: spec.required,
            kind,
        }
    }
}
