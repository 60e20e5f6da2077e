//! Domain types for expense tracking.

pub mod category;
pub mod common;
pub mod expense;
pub mod summary;

pub use category::{CategoryCatalog, CategoryDef};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use expense::{Expense, ExpenseDraft};
pub use summary::{CategorySlice, DayBucket, SpendingOverview};
