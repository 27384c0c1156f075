//! Raw input-form schema as served by the app-params endpoint.
//!
//! Each entry of `user_input_form` is a single-key object whose key names
//! the control kind, e.g. `{"text-input": {"label": "...", "variable": "..."}}`.
//! The externally tagged enum below matches that shape directly.

use serde::{Deserialize, Serialize};

/// One declared field of the app's input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserInputField {
    /// Single-line text input.
    #[serde(rename = "text-input")]
    TextInput(FieldSpec),
    /// Multi-line text input.
    #[serde(rename = "paragraph")]
    Paragraph(FieldSpec),
    /// Dropdown with a fixed option list.
    #[serde(rename = "select")]
    Select(SelectFieldSpec),
    /// Numeric input.
    #[serde(rename = "number")]
    Number(FieldSpec),
}

impl UserInputField {
    /// Returns the shared `label`/`variable`/`required` part of any field kind.
    pub fn spec(&self) -> &FieldSpec {
        match self {
            Self::TextInput(spec) | Self::Paragraph(spec) | Self::Number(spec) => spec,
            Self::Select(select) => &select.field,
        }
    }
}

/// Attributes shared by every form field kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Display label shown next to the control.
    pub label: String,
    /// Prompt-template variable this field binds to.
    pub variable: String,
    /// Whether the visitor must fill the field before running.
    #[serde(default)]
    pub required: bool,
    /// Maximum accepted input length, when the kind constrains it.
    #[serde(default)]
    pub max_length: Option<u32>,
    /// Pre-filled value.
    #[serde(default)]
    pub default: Option<String>,
}

/// A select field carries the shared attributes plus its option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectFieldSpec {
    #[serde(flatten)]
    pub field: FieldSpec,
    /// Choices offered by the dropdown, in display order.
    #[serde(default)]
    pub options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_externally_tagged_fields() {
        let raw = r#"[
            {"text-input": {"label": "Topic", "variable": "topic", "required": true, "max_length": 48}},
            {"select": {"label": "Tone", "variable": "tone", "options": ["formal", "casual"]}},
            {"paragraph": {"label": "Context", "variable": "context"}}
        ]"#;
        let fields: Vec<UserInputField> = serde_json::from_str(raw).unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].spec().variable, "topic");
        assert_eq!(fields[0].spec().max_length, Some(48));
        match &fields[1] {
            UserInputField::Select(select) => {
                assert_eq!(select.options, vec!["formal", "casual"]);
                assert!(!select.field.required);
            }
            other => panic!("expected select, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_kind_is_rejected() {
        let raw = r#"[{"slider": {"label": "X", "variable": "x"}}]"#;
        assert!(serde_json::from_str::<Vec<UserInputField>>(raw).is_err());
    }
}
