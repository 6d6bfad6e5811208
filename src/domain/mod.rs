//! Domain models for ledger entries, grouping keys, and date windows.

pub mod entry;
pub mod window;

pub use entry::{sanitize_text, Entry, EntryDraft, EntryKind, GroupKey, PaymentMethod};
pub use window::DateWindow;
