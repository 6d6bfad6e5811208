#![doc(test(attr(deny(warnings))))]

//! Fintrack Core offers the ledger and reporting primitives behind a personal
//! income/expense tracker: a caller-owned entry store with validated tabular
//! interchange, plus grouped aggregation for chart rendering.

pub mod domain;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod table;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
