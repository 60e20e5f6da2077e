use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::services::ValidationService;
use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::domain::expense::{Expense, ExpenseDraft};
use crate::errors::ExpenseError;

/// The caller-held expense collection.
///
/// `add` is the only way a record enters the collection, so everything in
/// `expenses` has passed validation. Aggregation never re-checks this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseBook {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ExpenseBook {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validates the draft and appends the accepted record, returning its id.
    pub fn add(&mut self, draft: &ExpenseDraft) -> Result<Uuid, ExpenseError> {
        let expense = ValidationService::accept(draft).map_err(ExpenseError::Validation)?;
        let id = expense.id;
        tracing::debug!(expense = %expense.display_label(), "expense accepted");
        self.expenses.push(expense);
        self.touch();
        Ok(id)
    }

    /// Removes the record identified by `id`, returning the removed instance.
    pub fn remove(&mut self, id: Uuid) -> Result<Expense, ExpenseError> {
        let position = self
            .expenses
            .iter()
            .position(|expense| expense.id == id)
            .ok_or(ExpenseError::NotFound(id))?;
        let removed = self.expenses.remove(position);
        tracing::debug!(%id, "expense removed");
        self.touch();
        Ok(removed)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Identifiable for ExpenseBook {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ExpenseBook {
    fn name(&self) -> &str {
        &self.name
    }
}
