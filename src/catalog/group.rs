use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::code::CptCode;

/// User-defined bucket holding an ordered run of codes. The id is assigned at
/// creation and never reused; display order is the order within the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub codes: Vec<CptCode>,
}

impl Group {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            codes: Vec::new(),
        }
    }

    pub fn with_codes(title: impl Into<String>, codes: Vec<CptCode>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            codes,
        }
    }

    /// Index of the first code whose `code` field matches, if any.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|c| c.code == code)
    }
}
