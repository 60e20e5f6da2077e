use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::CategoryCatalog;
use super::common::{Displayable, Identifiable};

/// A single validated expense record.
///
/// Records only ever enter the live collection through the accept path, so
/// every instance holds a trimmed non-empty description and a positive
/// amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({})", self.description, self.date)
    }
}

/// Raw form input for a candidate expense, prior to validation.
///
/// Every field is free-form text; an empty string models an absent field.
/// `amount` and `date` are parsed only when the draft is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            date: date.into(),
        }
    }

    /// Blank draft preset the way an entry form opens: today's local date and
    /// the catalog's first category preselected.
    pub fn for_today(catalog: &CategoryCatalog) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category: catalog
                .first()
                .map(|def| def.value.clone())
                .unwrap_or_default(),
            date: Local::now().date_naive().to_string(),
        }
    }
}
