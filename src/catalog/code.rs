use serde::{Deserialize, Serialize};

/// A billable procedure code and the productivity units it is worth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CptCode {
    pub code: String,
    pub description: String,
    pub wrvu_value: f64,
}

impl CptCode {
    pub fn new(code: impl Into<String>, description: impl Into<String>, wrvu_value: f64) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            wrvu_value,
        }
    }
}
