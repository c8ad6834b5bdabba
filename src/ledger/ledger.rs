use uuid::Uuid;

use crate::{
    catalog::CptCode,
    csv::ImportedRow,
    errors::StoreError,
    storage::{PersistenceGateway, Result, LEDGER_STORE},
};

use super::entry::Entry;

/// Owns the chronological entry ledger. Insertion order is canonical for
/// display and export; entries are never mutated in place. Every successful
/// mutation is followed by one synchronous save of the full entry list.
pub struct Ledger {
    entries: Vec<Entry>,
    gateway: Box<dyn PersistenceGateway>,
}

impl Ledger {
    /// Opens the ledger from the gateway's persisted document; absence means
    /// an empty ledger.
    pub fn open(gateway: Box<dyn PersistenceGateway>) -> Result<Self> {
        let entries = match gateway.load(LEDGER_STORE)? {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };
        Ok(Self { entries, gateway })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Records one use of `code` on `date`, snapshotting its code string and
    /// current wRVU value. Returns the new entry's id.
    pub fn add_entry(&mut self, date: &str, code: &CptCode) -> Uuid {
        let entry = Entry::new(date, code);
        let id = entry.id;
        self.entries.push(entry);
        self.persist();
        id
    }

    pub fn delete_entry(&mut self, id: Uuid) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Err(StoreError::EntryNotFound(id));
        }
        self.persist();
        Ok(())
    }

    /// Appends one entry per imported row, each with a fresh id, as a single
    /// uninterrupted step followed by one save. Import is additive; the
    /// existing ledger is never replaced.
    pub fn import_rows(&mut self, rows: Vec<ImportedRow>) {
        if rows.is_empty() {
            return;
        }
        for row in rows {
            self.entries
                .push(Entry::from_parts(row.date, row.cpt_code, row.wrvu_value));
        }
        self.persist();
    }

    /// Unrounded sum over all entries. Round with [`round2`] for display.
    pub fn total_wrvus(&self) -> f64 {
        self.entries.iter().map(|entry| entry.wrvu_value).sum()
    }

    /// Unrounded sum over entries whose date equals `date` exactly.
    pub fn daily_wrvus(&self, date: &str) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.date == date)
            .map(|entry| entry.wrvu_value)
            .sum()
    }

    fn persist(&self) {
        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(err) = self.gateway.save(LEDGER_STORE, &json) {
                    tracing::warn!("ledger save failed: {err}");
                }
            }
            Err(err) => tracing::warn!("ledger serialize failed: {err}"),
        }
    }
}

/// Display rounding for wRVU sums: two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
