//! Derived views and aggregates over a ledger snapshot.
//!
//! Nothing here mutates the ledger and nothing is cached: every report is
//! recomputed from the entries it is handed.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DateWindow, Entry, EntryKind, GroupKey};
use crate::ledger::Ledger;

/// Income and expense sums over a set of entries. `income` is expected
/// non-negative and `expense` non-positive under the sign invariant;
/// `net` is their sum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// One date's summed amount within a group.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

/// A group's per-date sums, ascending by date, plus the group's total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupSeries {
    pub group: String,
    pub points: Vec<SeriesPoint>,
    pub total: f64,
}

/// A group's summed amount, for proportional views. Signs are preserved:
/// an all-expense group carries a negative total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupTotal {
    pub group: String,
    pub total: f64,
}

pub struct ReportService;

impl ReportService {
    /// The ordered subsequence of entries dated inside `window`. Undated
    /// entries lie outside every window.
    pub fn filter_by_window(ledger: &Ledger, window: DateWindow) -> Vec<&Entry> {
        ledger
            .entries()
            .iter()
            .filter(|entry| entry.date.map_or(false, |date| window.contains(date)))
            .collect()
    }

    /// Sums amounts by entry kind. Unset amounts contribute nothing, and
    /// an empty input yields all-zero totals.
    pub fn totals(entries: &[&Entry]) -> Totals {
        let mut totals = Totals::default();
        for entry in entries {
            let amount = entry.amount.unwrap_or(0.0);
            match entry.kind {
                EntryKind::Income => totals.income += amount,
                EntryKind::Expense => totals.expense += amount,
            }
        }
        totals.net = totals.income + totals.expense;
        totals
    }

    /// Partitions `entries` by `key` and, within each group, sums amounts
    /// per date. Groups appear in first-occurrence order; points ascend by
    /// date. Undated entries are skipped, since they have no place on a
    /// time axis.
    pub fn group_time_series(entries: &[&Entry], key: GroupKey) -> Vec<GroupSeries> {
        let mut order: Vec<String> = Vec::new();
        let mut by_group: HashMap<String, BTreeMap<NaiveDate, f64>> = HashMap::new();
        for entry in entries {
            let date = match entry.date {
                Some(date) => date,
                None => continue,
            };
            let group = entry.group_value(key);
            if !by_group.contains_key(&group) {
                order.push(group.clone());
            }
            *by_group.entry(group).or_default().entry(date).or_default() +=
                entry.amount.unwrap_or(0.0);
        }

        order
            .into_iter()
            .map(|group| {
                let points = by_group.remove(&group).unwrap_or_default();
                let total = points.values().sum();
                GroupSeries {
                    group,
                    points: points
                        .into_iter()
                        .map(|(date, amount)| SeriesPoint { date, amount })
                        .collect(),
                    total,
                }
            })
            .collect()
    }

    /// Partitions `entries` by `key` and sums each group's amounts. Groups
    /// are returned in ascending name order.
    pub fn group_totals(entries: &[&Entry], key: GroupKey) -> Vec<GroupTotal> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for entry in entries {
            *totals.entry(entry.group_value(key)).or_default() += entry.amount.unwrap_or(0.0);
        }
        totals
            .into_iter()
            .map(|(group, total)| GroupTotal { group, total })
            .collect()
    }
}
