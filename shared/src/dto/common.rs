use serde::{Deserialize, Serialize};

/// Error body returned by the REST backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Human readable reason, when the backend sent one
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

/// A number that may arrive as JSON number or as text, as produced by
/// document extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LooseNumber {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl LooseNumber {
    /// Form-input rendering; `None` for zero or blank values.
    pub fn to_input(&self) -> Option<String> {
        match self {
            LooseNumber::Integer(0) => None,
            LooseNumber::Integer(n) => Some(n.to_string()),
            LooseNumber::Float(f) if *f == 0.0 || !f.is_finite() => None,
            LooseNumber::Float(f) => Some(f.to_string()),
            LooseNumber::Text(t) if t.trim().is_empty() => None,
            LooseNumber::Text(t) => Some(t.trim().to_string()),
        }
    }
}
