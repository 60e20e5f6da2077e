use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Closed set of form fields a candidate expense can fail on.
///
/// Declaration order is form order; `ValidationReport` iterates in it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseField {
    Description,
    Amount,
    Category,
    Date,
}

impl ExpenseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseField::Description => "description",
            ExpenseField::Amount => "amount",
            ExpenseField::Category => "category",
            ExpenseField::Date => "date",
        }
    }
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-keyed validation outcome for one candidate expense.
///
/// Returned, never thrown: an empty map means the candidate is valid. All
/// violated fields are reported together, without short-circuiting.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<ExpenseField, String>,
}

impl ValidationReport {
    pub fn push(&mut self, field: ExpenseField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: ExpenseField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<ExpenseField, String> {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Error type that captures the crate's failure shapes.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),
    #[error("Expense not found: {0}")]
    NotFound(Uuid),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_iterates_in_form_order() {
        let mut report = ValidationReport::default();
        report.push(ExpenseField::Date, "La fecha es requerida");
        report.push(ExpenseField::Description, "La descripción es requerida");
        let fields: Vec<_> = report.errors().keys().copied().collect();
        assert_eq!(fields, vec![ExpenseField::Description, ExpenseField::Date]);
    }

    #[test]
    fn report_serializes_as_field_keyed_map() {
        let mut report = ValidationReport::default();
        report.push(ExpenseField::Amount, "El monto debe ser mayor a 0");
        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["amount"], "El monto debe ser mayor a 0");
    }

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert_eq!(report.len(), 0);
        assert_eq!(format!("{report}"), "");
    }
}
