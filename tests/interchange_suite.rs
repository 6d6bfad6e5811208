use fintrack_core::domain::EntryKind;
use fintrack_core::errors::LedgerError;

mod common;
use common::{date, draft, sample_ledger};

#[test]
fn import_missing_amount_column_leaves_ledger_unchanged() {
    let mut ledger = sample_ledger();
    let before = ledger.entries().to_vec();

    let table = "\
Select,Date,Name,Description,Category,Type,Currency,Payment Method,Project
false,2024-06-01,Salary,,Salary,Income,CHF,Bank Transfer,Personal
";
    let error = ledger
        .import_rows(table.as_bytes())
        .expect_err("missing Amount must abort");
    match error {
        LedgerError::MissingColumns(columns) => assert_eq!(columns, vec!["Amount"]),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
    assert_eq!(ledger.entries(), before.as_slice());
}

#[test]
fn import_with_unknown_type_leaves_ledger_unchanged() {
    let mut ledger = sample_ledger();
    let before = ledger.entries().to_vec();

    let table = "\
Select,Date,Name,Description,Amount,Category,Type,Currency,Payment Method,Project
false,2024-06-01,Salary,,5000,Salary,Income,CHF,Bank Transfer,Personal
false,2024-06-02,Move,,100,Misc,Transfer,CHF,Cash,Personal
";
    let error = ledger
        .import_rows(table.as_bytes())
        .expect_err("unknown type must abort");
    assert!(matches!(error, LedgerError::UnknownKind { row: 2, .. }));
    assert_eq!(ledger.entries(), before.as_slice());
}

#[test]
fn import_replaces_the_whole_ledger() {
    let mut ledger = sample_ledger();

    let table = "\
Select,Date,Name,Description,Amount,Category,Type,Currency,Payment Method,Project
false,2024-06-01,Consulting,,2500,Work,Income,EUR,Bank Transfer,Side
false,2024-06-05,Server,,40,Tech,Expense,EUR,Credit Card,Side
";
    let summary = ledger.import_rows(table.as_bytes()).expect("import succeeds");

    assert_eq!(summary.rows, 2);
    assert!(summary.is_clean());
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.entry(0).map(|entry| entry.name.as_str()), Some("Consulting"));
    assert_eq!(ledger.entry(0).and_then(|entry| entry.date), Some(date(2024, 6, 1)));
    assert_eq!(ledger.entry(1).and_then(|entry| entry.amount), Some(-40.0));
}

#[test]
fn import_summary_reports_fallback_rows() {
    let mut ledger = sample_ledger();

    let table = "\
Select,Date,Name,Description,Amount,Category,Type,Currency,Payment Method,Project
false,someday,Salary,,5000,Salary,Income,CHF,Bank Transfer,Personal
false,2024-06-02,Rent,,a lot,Housing,Expense,CHF,Bank Transfer,Personal
";
    let summary = ledger.import_rows(table.as_bytes()).expect("lenient import succeeds");

    assert_eq!(summary.unparsed_dates, vec![1]);
    assert_eq!(summary.unparsed_amounts, vec![2]);
    assert!(!summary.is_clean());
    assert_eq!(ledger.entry(0).and_then(|entry| entry.date), None);
    assert_eq!(ledger.entry(1).and_then(|entry| entry.amount), None);
}

#[test]
fn thousands_separators_parse_with_type_driven_sign() {
    let mut ledger = sample_ledger();

    let table = "\
Select,Date,Name,Description,Amount,Category,Type,Currency,Payment Method,Project
false,2024-06-01,Laptop,,\"1,234.50\",Tech,expense,CHF,Credit Card,Personal
";
    ledger.import_rows(table.as_bytes()).expect("import succeeds");
    assert_eq!(ledger.entry(0).and_then(|entry| entry.amount), Some(-1234.50));
}

#[test]
fn export_then_import_round_trips_byte_for_byte() {
    let mut ledger = sample_ledger();
    ledger.add(draft(None, "Lost receipt", EntryKind::Expense, 12.0));
    ledger.set_selected(1, true).expect("position 1 exists");

    let first = ledger.export().expect("first export");
    ledger.import_rows(first.as_bytes()).expect("re-import");
    let second = ledger.export().expect("second export");

    assert_eq!(first, second);
}

#[test]
fn export_of_an_empty_ledger_is_importable() {
    let mut ledger = sample_ledger();
    ledger.reset();

    let exported = ledger.export().expect("empty export");
    let summary = ledger.import_rows(exported.as_bytes()).expect("empty import");
    assert_eq!(summary.rows, 0);
    assert!(ledger.is_empty());
}
