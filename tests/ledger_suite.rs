use wrvu_core::{
    catalog::CptCode,
    csv,
    ledger::{round2, Ledger},
    storage::MemoryGateway,
};

fn open_ledger() -> (Ledger, MemoryGateway) {
    let gateway = MemoryGateway::new();
    let ledger = Ledger::open(Box::new(gateway.clone())).expect("open ledger");
    (ledger, gateway)
}

#[test]
fn daily_and_total_sums_for_one_clinic_day() {
    let (mut ledger, _gateway) = open_ledger();
    let level3 = CptCode::new("99213", "Office Visit Level 3", 0.97);
    let level4 = CptCode::new("99214", "Office Visit Level 4", 1.5);
    let level5 = CptCode::new("99215", "Office Visit Level 5", 2.11);

    ledger.add_entry("2024-01-01", &level3);
    assert_eq!(round2(ledger.daily_wrvus("2024-01-01")), 0.97);

    ledger.add_entry("2024-01-01", &level4);
    ledger.add_entry("2024-01-01", &level5);
    assert_eq!(round2(ledger.daily_wrvus("2024-01-01")), 4.58);
    assert_eq!(round2(ledger.total_wrvus()), 4.58);
    assert_eq!(ledger.daily_wrvus("2024-01-02"), 0.0);
}

#[test]
fn delete_entry_removes_only_the_matching_id() {
    let (mut ledger, _gateway) = open_ledger();
    let code = CptCode::new("99213", "Office Visit Level 3", 0.97);
    let first = ledger.add_entry("2024-01-01", &code);
    let second = ledger.add_entry("2024-01-01", &code);
    assert_ne!(first, second);

    ledger.delete_entry(first).expect("delete");
    assert_eq!(ledger.entry_count(), 1);
    assert_eq!(ledger.entries()[0].id, second);
    assert!(ledger.delete_entry(first).is_err());
}

#[test]
fn export_then_import_preserves_the_entry_multiset() {
    let (mut source, _gateway) = open_ledger();
    source.add_entry("2024-01-01", &CptCode::new("99213", "Office Visit Level 3", 0.97));
    source.add_entry("2024-01-01", &CptCode::new("99214", "Office Visit Level 4", 1.5));
    source.add_entry("2024-02-14", &CptCode::new("99215", "Office Visit Level 5", 2.11));
    // Duplicate recording of the same code on the same day must survive.
    source.add_entry("2024-02-14", &CptCode::new("99215", "Office Visit Level 5", 2.11));

    let text = csv::export_entries(source.entries());
    let report = csv::import_entries(&text);
    assert!(report.rejected.is_empty());

    let (mut fresh, _gateway) = open_ledger();
    fresh.import_rows(report.rows);
    assert_eq!(fresh.entry_count(), source.entry_count());

    let multiset = |ledger: &Ledger| {
        let mut rows: Vec<(String, String, u64)> = ledger
            .entries()
            .iter()
            .map(|e| (e.date.clone(), e.cpt_code.clone(), e.wrvu_value.to_bits()))
            .collect();
        rows.sort();
        rows
    };
    assert_eq!(multiset(&fresh), multiset(&source));

    // Fresh identifiers, not copies of the source ids.
    for entry in fresh.entries() {
        assert!(source.entries().iter().all(|s| s.id != entry.id));
    }
}

#[test]
fn import_is_additive_and_keeps_ledger_order() {
    let (mut ledger, _gateway) = open_ledger();
    ledger.add_entry("2024-01-01", &CptCode::new("99213", "Office Visit Level 3", 0.97));

    let report = csv::import_entries("Date,CPT Code,wRVUs\n2024-01-02,99214,1.5");
    ledger.import_rows(report.rows);

    let codes: Vec<_> = ledger.entries().iter().map(|e| e.cpt_code.as_str()).collect();
    assert_eq!(codes, vec!["99213", "99214"]);
}

#[test]
fn rejected_rows_never_reach_aggregation() {
    let (mut ledger, _gateway) = open_ledger();
    let text = "Date,CPT Code,wRVUs\n2024-01-01,99213,0.97\n2024-01-01,99214,NaN-ish";
    let report = csv::import_entries(text);
    assert_eq!(report.rejected.len(), 1);

    ledger.import_rows(report.rows);
    assert_eq!(ledger.entry_count(), 1);
    let total = ledger.total_wrvus();
    assert!(total.is_finite());
    assert_eq!(round2(total), 0.97);
}
