//! Validation of candidate expenses.

use chrono::NaiveDate;

use crate::domain::expense::{Expense, ExpenseDraft};
use crate::errors::{ExpenseField, ValidationReport};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const MSG_DESCRIPTION_REQUIRED: &str = "La descripción es requerida";
const MSG_AMOUNT_POSITIVE: &str = "El monto debe ser mayor a 0";
const MSG_CATEGORY_REQUIRED: &str = "La categoría es requerida";
const MSG_DATE_REQUIRED: &str = "La fecha es requerida";
const MSG_DATE_INVALID: &str = "La fecha no es válida";

/// Checks candidate expenses and converts accepted drafts into records.
pub struct ValidationService;

impl ValidationService {
    /// Checks every rule independently and reports all violated fields
    /// together. An empty report means the draft is valid.
    pub fn validate(draft: &ExpenseDraft) -> ValidationReport {
        let mut report = ValidationReport::default();
        if draft.description.trim().is_empty() {
            report.push(ExpenseField::Description, MSG_DESCRIPTION_REQUIRED);
        }
        if !Self::amount_is_positive(&draft.amount) {
            report.push(ExpenseField::Amount, MSG_AMOUNT_POSITIVE);
        }
        if draft.category.trim().is_empty() {
            report.push(ExpenseField::Category, MSG_CATEGORY_REQUIRED);
        }
        if draft.date.trim().is_empty() {
            report.push(ExpenseField::Date, MSG_DATE_REQUIRED);
        }
        report
    }

    /// Runs [`Self::validate`], then parses the typed fields.
    ///
    /// Records store a calendar date, so a non-empty date that is not
    /// `YYYY-MM-DD` is rejected here under the `date` field.
    pub fn accept(draft: &ExpenseDraft) -> Result<Expense, ValidationReport> {
        let mut report = Self::validate(draft);

        let date_raw = draft.date.trim();
        let date = if date_raw.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(date_raw, ISO_DATE_FORMAT) {
                Ok(parsed) => Some(parsed),
                Err(_) => {
                    report.push(ExpenseField::Date, MSG_DATE_INVALID);
                    None
                }
            }
        };
        let amount = draft.amount.trim().parse::<f64>().ok();

        match (amount, date) {
            (Some(amount), Some(date)) if report.is_valid() => Ok(Expense::new(
                draft.description.trim(),
                amount,
                draft.category.trim(),
                date,
            )),
            _ => Err(report),
        }
    }

    // Parse failure counts as a non-positive amount.
    fn amount_is_positive(raw: &str) -> bool {
        raw.trim()
            .parse::<f64>()
            .map(|value| value > 0.0)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ExpenseDraft {
        ExpenseDraft::new("Lunch", "10.50", "comida", "2024-01-01")
    }

    #[test]
    fn valid_draft_produces_empty_report() {
        let report = ValidationService::validate(&valid_draft());
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn blank_description_fails_only_that_field() {
        let mut draft = valid_draft();
        draft.description = "".into();
        let report = ValidationService::validate(&draft);
        assert!(!report.is_valid());
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.error(ExpenseField::Description),
            Some(MSG_DESCRIPTION_REQUIRED)
        );
    }

    #[test]
    fn whitespace_only_description_fails() {
        let mut draft = valid_draft();
        draft.description = "   ".into();
        let report = ValidationService::validate(&draft);
        assert_eq!(report.len(), 1);
        assert!(report.error(ExpenseField::Description).is_some());
    }

    #[test]
    fn zero_amount_fails_only_that_field() {
        let mut draft = valid_draft();
        draft.amount = "0".into();
        let report = ValidationService::validate(&draft);
        assert_eq!(report.len(), 1);
        assert_eq!(report.error(ExpenseField::Amount), Some(MSG_AMOUNT_POSITIVE));
    }

    #[test]
    fn negative_and_non_numeric_amounts_fail() {
        for raw in ["-5", "abc", "NaN"] {
            let mut draft = valid_draft();
            draft.amount = raw.into();
            let report = ValidationService::validate(&draft);
            assert!(
                report.error(ExpenseField::Amount).is_some(),
                "amount {raw:?} should fail"
            );
        }
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let report = ValidationService::validate(&ExpenseDraft::default());
        assert_eq!(report.len(), 4);
        for field in [
            ExpenseField::Description,
            ExpenseField::Amount,
            ExpenseField::Category,
            ExpenseField::Date,
        ] {
            assert!(report.error(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn accept_builds_a_trimmed_typed_record() {
        let draft = ExpenseDraft::new("  Lunch  ", " 10.50 ", "comida", "2024-01-01");
        let expense = ValidationService::accept(&draft).expect("draft is valid");
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.amount, 10.5);
        assert_eq!(expense.category, "comida");
        assert_eq!(
            expense.date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn accept_rejects_garbage_date_under_the_date_field() {
        let draft = ExpenseDraft::new("Lunch", "10.50", "comida", "01/01/2024");
        let report = ValidationService::accept(&draft).expect_err("date must be rejected");
        assert_eq!(report.len(), 1);
        assert_eq!(report.error(ExpenseField::Date), Some(MSG_DATE_INVALID));
    }

    #[test]
    fn accept_collects_all_failures_at_once() {
        let draft = ExpenseDraft::new("", "0", "comida", "not-a-date");
        let report = ValidationService::accept(&draft).expect_err("invalid draft");
        assert_eq!(report.len(), 3);
        assert!(report.error(ExpenseField::Description).is_some());
        assert!(report.error(ExpenseField::Amount).is_some());
        assert_eq!(report.error(ExpenseField::Date), Some(MSG_DATE_INVALID));
    }
}
