#![doc(test(attr(deny(warnings))))]

//! Expense Core offers the validation, aggregation, and formatting
//! primitives behind a personal expense-tracking widget.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

pub use self::core::services::{SummaryService, ValidationService, DEFAULT_WINDOW_DAYS};
pub use self::core::ExpenseBook;
pub use domain::{
    CategoryCatalog, CategoryDef, CategorySlice, DayBucket, Expense, ExpenseDraft,
    SpendingOverview,
};
pub use errors::{ExpenseError, ExpenseField, ValidationReport};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
