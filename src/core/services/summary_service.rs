//! Pure aggregation over the expense collection.
//!
//! Every operation is read-only over its input and returns freshly built
//! derived structures; callers re-invoke them after each mutation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::currency;
use crate::domain::category::CategoryCatalog;
use crate::domain::expense::Expense;
use crate::domain::summary::{CategorySlice, DayBucket, SpendingOverview};

/// Trailing window applied to the per-day series.
pub const DEFAULT_WINDOW_DAYS: usize = 7;

pub struct SummaryService;

impl SummaryService {
    /// Sum of all recorded amounts. Empty input sums to zero.
    pub fn total(expenses: &[Expense]) -> f64 {
        expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Per-category totals in catalog order, omitting categories without
    /// spend. Records whose category is not in the catalog contribute to no
    /// slice.
    pub fn by_category(expenses: &[Expense], catalog: &CategoryCatalog) -> Vec<CategorySlice> {
        catalog
            .iter()
            .filter_map(|def| {
                let value: f64 = expenses
                    .iter()
                    .filter(|expense| expense.category == def.value)
                    .map(|expense| expense.amount)
                    .sum();
                (value > 0.0).then(|| CategorySlice {
                    name: def.label.clone(),
                    value,
                    color: def.color.clone(),
                })
            })
            .collect()
    }

    /// Per-day totals in ascending date order, trimmed to the most recent
    /// `days` distinct dates.
    pub fn by_day(expenses: &[Expense], days: usize) -> Vec<DayBucket> {
        let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for expense in expenses {
            *daily.entry(expense.date).or_insert(0.0) += expense.amount;
        }
        let skip = daily.len().saturating_sub(days);
        daily
            .into_iter()
            .skip(skip)
            .map(|(date, amount)| DayBucket {
                date: currency::format_short_day(date),
                amount,
                full_date: date,
            })
            .collect()
    }

    /// Total divided by the number of day buckets; zero when there are none.
    pub fn daily_average(expenses: &[Expense], buckets: &[DayBucket]) -> f64 {
        if buckets.is_empty() {
            return 0.0;
        }
        Self::total(expenses) / buckets.len() as f64
    }

    /// The record with the largest amount.
    pub fn highest_expense(expenses: &[Expense]) -> Option<&Expense> {
        expenses.iter().reduce(|max, expense| {
            if expense.amount > max.amount {
                expense
            } else {
                max
            }
        })
    }

    /// The category slice with the largest summed value.
    pub fn top_category(slices: &[CategorySlice]) -> Option<&CategorySlice> {
        slices.iter().reduce(|max, slice| {
            if slice.value > max.value {
                slice
            } else {
                max
            }
        })
    }

    /// Bundles the per-frame dashboard figures in one pass.
    pub fn overview(
        expenses: &[Expense],
        catalog: &CategoryCatalog,
        days: usize,
    ) -> SpendingOverview {
        let by_day = Self::by_day(expenses, days);
        SpendingOverview {
            total: Self::total(expenses),
            count: expenses.len(),
            by_category: Self::by_category(expenses, catalog),
            daily_average: Self::daily_average(expenses, &by_day),
            by_day,
        }
    }
}
