use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::CptCode;

/// One recorded use of a code on a given date. The code string and wRVU value
/// are snapshots taken at creation; later catalog edits never reach back into
/// an entry. The date is kept as the calendar string the caller supplied and
/// compared by string equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub date: String,
    pub cpt_code: String,
    pub wrvu_value: f64,
}

impl Entry {
    pub fn new(date: impl Into<String>, code: &CptCode) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            date: date.into(),
            cpt_code: code.code.clone(),
            wrvu_value: code.wrvu_value,
        }
    }

    /// Entry built from already-snapshotted fields, as produced by CSV import.
    pub fn from_parts(date: impl Into<String>, cpt_code: impl Into<String>, wrvu_value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            date: date.into(),
            cpt_code: cpt_code.into(),
            wrvu_value,
        }
    }
}
