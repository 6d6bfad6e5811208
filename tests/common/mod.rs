use chrono::NaiveDate;
use fintrack_core::domain::{EntryDraft, EntryKind, PaymentMethod};
use fintrack_core::ledger::Ledger;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn draft(date: Option<NaiveDate>, name: &str, kind: EntryKind, amount: f64) -> EntryDraft {
    EntryDraft {
        date,
        name: name.into(),
        description: String::new(),
        amount,
        category: "General".into(),
        kind,
        currency: "CHF".into(),
        payment_method: PaymentMethod::DebitCard,
        project: "Personal".into(),
    }
}

/// Builds a three-entry ledger spanning January and February 2024, matching
/// the worked examples used across the suites.
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add(draft(Some(date(2024, 1, 5)), "Salary", EntryKind::Income, 100.0));
    ledger.add(draft(Some(date(2024, 1, 10)), "Dinner", EntryKind::Expense, 40.0));
    ledger.add(draft(Some(date(2024, 2, 1)), "Refund", EntryKind::Income, 50.0));
    ledger
}
