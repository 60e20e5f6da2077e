//! Derived, chart-ready views over the expense collection.
//!
//! These types carry no lifecycle of their own: they are rebuilt on demand
//! from the current records and handed to the presentation layer verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-category total for the pie chart, in catalog order.
///
/// Only categories with a sum strictly greater than zero are emitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// Per-day total for the bar chart.
///
/// `date` is the locale-formatted axis label; `full_date` keeps the
/// canonical calendar date used for sorting and windowing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayBucket {
    pub date: String,
    pub amount: f64,
    #[serde(rename = "fullDate")]
    pub full_date: NaiveDate,
}

/// Everything a dashboard renders per frame, bundled in one pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendingOverview {
    pub total: f64,
    pub count: usize,
    pub by_category: Vec<CategorySlice>,
    pub by_day: Vec<DayBucket>,
    pub daily_average: f64,
}
