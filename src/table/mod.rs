//! Reading and writing the comma-delimited interchange format.
//!
//! The canonical layout is a header row followed by one row per entry:
//!
//! ```text
//! Select,Date,Name,Description,Amount,Category,Type,Currency,Payment Method,Project
//! false,2024-06-01,Salary,,5000.00,Salary,Income,CHF,Bank Transfer,Personal
//! ```
//!
//! Reads are lenient where the data can degrade safely (dates and amounts
//! fall back to unset, extra columns are ignored, short rows are padded) and
//! strict where it cannot (missing required columns and unknown `Type`
//! values abort the import, since without a type the amount sign is
//! undefined).

use std::collections::HashMap;
use std::io::Read;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::warn;
use uuid::Uuid;

use crate::domain::{sanitize_text, Entry, EntryKind, PaymentMethod};
use crate::errors::LedgerError;

/// Canonical column order of the interchange format. Every column except
/// `Select` is required on import.
pub const COLUMNS: [&str; 10] = [
    "Select",
    "Date",
    "Name",
    "Description",
    "Amount",
    "Category",
    "Type",
    "Currency",
    "Payment Method",
    "Project",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Outcome of a successful import: how many data rows were read and which
/// of them (1-based, header excluded) had a date or amount that could not
/// be parsed and was left unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub rows: usize,
    pub unparsed_dates: Vec<usize>,
    pub unparsed_amounts: Vec<usize>,
}

impl ImportSummary {
    /// Whether every row parsed cleanly.
    pub fn is_clean(&self) -> bool {
        self.unparsed_dates.is_empty() && self.unparsed_amounts.is_empty()
    }
}

/// Decodes interchange rows into entries. Returns the decoded entries
/// together with a summary of the rows that needed fallbacks; any schema
/// or type failure aborts the whole read.
pub fn read_entries<R: Read>(reader: R) -> Result<(Vec<Entry>, ImportSummary), LedgerError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (position, name) in headers.iter().enumerate() {
        // First occurrence wins when a header is duplicated.
        index.entry(name).or_insert(position);
    }

    let missing: Vec<String> = COLUMNS
        .iter()
        .filter(|column| **column != "Select")
        .filter(|column| !index.contains_key(**column))
        .map(|column| column.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LedgerError::MissingColumns(missing));
    }

    let mut entries = Vec::new();
    let mut summary = ImportSummary::default();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        let row = row_index + 1;
        summary.rows += 1;

        let raw_kind = field(&record, &index, "Type");
        let kind = EntryKind::parse(raw_kind).ok_or_else(|| LedgerError::UnknownKind {
            row,
            found: raw_kind.trim().to_string(),
        })?;

        let raw_date = field(&record, &index, "Date").trim();
        let date = if raw_date.is_empty() {
            None
        } else {
            let parsed = parse_date(raw_date);
            if parsed.is_none() {
                warn!("row {} has unparseable date `{}`, leaving it unset", row, raw_date);
                summary.unparsed_dates.push(row);
            }
            parsed
        };

        let cleaned_amount = field(&record, &index, "Amount").replace([',', '\''], "");
        let raw_amount = cleaned_amount.trim();
        let amount = if raw_amount.is_empty() {
            None
        } else {
            // Non-finite spellings (`NaN`, `inf`) parse as f64 but have no
            // place in a ledger amount; they take the fallback path so they
            // cannot poison aggregate sums.
            match raw_amount.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(kind.signed(value)),
                _ => {
                    warn!("row {} has unparseable amount `{}`, leaving it unset", row, raw_amount);
                    summary.unparsed_amounts.push(row);
                    None
                }
            }
        };

        let selected = matches!(
            field(&record, &index, "Select").trim().to_lowercase().as_str(),
            "true" | "1"
        );

        entries.push(Entry {
            id: Uuid::new_v4(),
            date,
            name: sanitize_text(field(&record, &index, "Name")),
            description: sanitize_text(field(&record, &index, "Description")),
            amount,
            category: sanitize_text(field(&record, &index, "Category")),
            kind,
            currency: sanitize_text(field(&record, &index, "Currency")),
            payment_method: PaymentMethod::parse(field(&record, &index, "Payment Method")),
            project: sanitize_text(field(&record, &index, "Project")),
            selected,
        });
    }

    Ok((entries, summary))
}

/// Encodes entries into the interchange format. The header row is always
/// written, so an empty ledger still exports a valid, re-importable table.
pub fn write_entries(entries: &[Entry]) -> Result<String, LedgerError> {
    let mut buffer = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buffer);
        writer.write_record(&COLUMNS)?;
        for entry in entries {
            // Field order must match COLUMNS.
            writer.write_record(&[
                entry.selected.to_string(),
                entry
                    .date
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
                entry.name.clone(),
                entry.description.clone(),
                entry
                    .amount
                    .map(|amount| format!("{:.2}", amount))
                    .unwrap_or_default(),
                entry.category.clone(),
                entry.kind.to_string(),
                entry.currency.clone(),
                entry.payment_method.to_string(),
                entry.project.clone(),
            ])?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}

/// Looks a field up by canonical column name, treating cells missing from
/// short rows as empty.
fn field<'r>(record: &'r StringRecord, index: &HashMap<&str, usize>, column: &str) -> &'r str {
    index
        .get(column)
        .and_then(|&position| record.get(position))
        .unwrap_or("")
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    None
}
