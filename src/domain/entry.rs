//! Domain model for a single income/expense record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Strips the tabular delimiter from user-supplied text so free-text fields
/// can never break the persisted comma-delimited format.
pub fn sanitize_text(text: &str) -> String {
    text.replace(',', "")
}

/// A single income or expense record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    /// `None` when an imported date failed to parse; such entries fall
    /// outside every reporting window.
    pub date: Option<NaiveDate>,
    pub name: String,
    pub description: String,
    /// Signed amount: income non-negative, expense non-positive. The sign is
    /// always derived from `kind`, never trusted from raw input. `None` when
    /// the amount is unset: an imported cell that failed to parse, or a
    /// non-finite caller magnitude. Set amounts are always finite.
    pub amount: Option<f64>,
    pub category: String,
    pub kind: EntryKind,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub project: String,
    /// UI-transient row selection flag; cleared by every successful edit.
    #[serde(default)]
    pub selected: bool,
}

impl Entry {
    /// Builds a fully normalized entry from caller-supplied fields: text is
    /// sanitized, the amount sign is derived from the kind, and the entry
    /// starts unselected with a fresh identity. A non-finite magnitude has
    /// no sign to derive and stores as unset.
    pub fn from_draft(draft: EntryDraft) -> Self {
        let amount = draft
            .amount
            .is_finite()
            .then(|| draft.kind.signed(draft.amount));
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            name: sanitize_text(&draft.name),
            description: sanitize_text(&draft.description),
            amount,
            category: sanitize_text(&draft.category),
            kind: draft.kind,
            currency: sanitize_text(&draft.currency),
            payment_method: draft.payment_method.sanitized(),
            project: sanitize_text(&draft.project),
            selected: false,
        }
    }

    /// Replaces every caller-editable field, re-deriving the amount sign and
    /// clearing the selection flag. The identity is kept: an edit changes
    /// the entry, not which entry it is.
    pub fn apply_draft(&mut self, draft: EntryDraft) {
        *self = Entry {
            id: self.id,
            ..Entry::from_draft(draft)
        };
    }

    /// Returns the value partitioning this entry under `key`.
    pub fn group_value(&self, key: GroupKey) -> String {
        match key {
            GroupKey::Project => self.project.clone(),
            GroupKey::PaymentMethod => self.payment_method.to_string(),
            GroupKey::Category => self.category.clone(),
            GroupKey::Kind => self.kind.to_string(),
            GroupKey::Currency => self.currency.clone(),
        }
    }
}

/// Caller-supplied fields for creating or editing an entry. The amount is a
/// magnitude (expected non-negative); the stored sign comes from `kind`.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub date: Option<NaiveDate>,
    pub name: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub kind: EntryKind,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub project: String,
}

/// Direction of a ledger entry; determines the stored amount sign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EntryKind {
    #[default]
    Income,
    Expense,
}

impl EntryKind {
    /// Applies this kind's sign to a caller-supplied magnitude.
    pub fn signed(self, magnitude: f64) -> f64 {
        match self {
            EntryKind::Income => magnitude.abs(),
            EntryKind::Expense => -magnitude.abs(),
        }
    }

    /// Case-insensitive parse accepting the interchange spellings `income`,
    /// `expense`, and `expenses`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "income" => Some(EntryKind::Income),
            "expense" | "expenses" => Some(EntryKind::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// How an entry was paid. The named methods mirror the entry form's
/// choices; anything else round-trips through `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    DebitCard,
    CreditCard,
    Cash,
    BankTransfer,
    Paypal,
    Other(String),
}

impl PaymentMethod {
    /// Case-insensitive parse on the display labels. Unknown labels are
    /// preserved (comma-stripped) rather than rejected, so imports never
    /// fail on a payment method.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "debit card" => PaymentMethod::DebitCard,
            "credit card" => PaymentMethod::CreditCard,
            "cash" => PaymentMethod::Cash,
            "bank transfer" => PaymentMethod::BankTransfer,
            "paypal" => PaymentMethod::Paypal,
            _ => PaymentMethod::Other(sanitize_text(value.trim())),
        }
    }

    pub(crate) fn sanitized(self) -> Self {
        match self {
            PaymentMethod::Other(label) => PaymentMethod::Other(sanitize_text(&label)),
            known => known,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::DebitCard => f.write_str("Debit Card"),
            PaymentMethod::CreditCard => f.write_str("Credit Card"),
            PaymentMethod::Cash => f.write_str("Cash"),
            PaymentMethod::BankTransfer => f.write_str("Bank Transfer"),
            PaymentMethod::Paypal => f.write_str("Paypal"),
            PaymentMethod::Other(label) => f.write_str(label),
        }
    }
}

/// Entry attribute used to partition a filtered view for aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupKey {
    Project,
    PaymentMethod,
    Category,
    Kind,
    Currency,
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroupKey::Project => "Project",
            GroupKey::PaymentMethod => "Payment Method",
            GroupKey::Category => "Category",
            GroupKey::Kind => "Type",
            GroupKey::Currency => "Currency",
        };
        f.write_str(label)
    }
}
