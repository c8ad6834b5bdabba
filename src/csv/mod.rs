//! Flat CSV round-trip for the ledger. The format is the tracker's historical
//! one: a fixed header, comma-joined fields, no quoting or escaping. A field
//! value containing a comma corrupts its row boundary; that is a documented
//! limitation of the format, not something this codec repairs.

use crate::ledger::Entry;

pub const CSV_HEADER: &str = "Date,CPT Code,wRVUs";

/// One well-formed imported row, ready to become a ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRow {
    pub date: String,
    pub cpt_code: String,
    pub wrvu_value: f64,
}

/// A line the importer refused, with enough context to report it.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based line number within the imported text.
    pub line: usize,
    pub raw: String,
    pub reason: String,
}

/// Outcome of an import pass: the rows that parsed plus the rows that were
/// rejected. Rejected rows never reach the ledger, so a malformed wRVU field
/// cannot poison later aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    pub rows: Vec<ImportedRow>,
    pub rejected: Vec<RejectedRow>,
}

/// Serializes entries in ledger order under the fixed header. No trailing
/// newline; numbers print in their shortest form.
pub fn export_entries(entries: &[Entry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for entry in entries {
        lines.push(format!(
            "{},{},{}",
            entry.date, entry.cpt_code, entry.wrvu_value
        ));
    }
    lines.join("\n")
}

/// Parses exported text back into rows. The first line is discarded
/// unconditionally as the header; every remaining non-empty line must split
/// into exactly three comma-separated fields with a numeric third field.
/// Malformed lines are collected in the report instead of imported.
pub fn import_entries(text: &str) -> ImportReport {
    let mut report = ImportReport::default();
    for (index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            report.rejected.push(RejectedRow {
                line: index + 1,
                raw: line.to_string(),
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
            continue;
        }
        let wrvu_value: f64 = match fields[2].trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                report.rejected.push(RejectedRow {
                    line: index + 1,
                    raw: line.to_string(),
                    reason: format!("`{}` is not a finite number", fields[2]),
                });
                continue;
            }
        };
        report.rows.push(ImportedRow {
            date: fields[0].to_string(),
            cpt_code: fields[1].to_string(),
            wrvu_value,
        });
    }
    if !report.rejected.is_empty() {
        tracing::debug!("import rejected {} row(s)", report.rejected.len());
    }
    report
}
