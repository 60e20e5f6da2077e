pub mod summary_service;
pub mod validation_service;

pub use summary_service::{SummaryService, DEFAULT_WINDOW_DAYS};
pub use validation_service::ValidationService;
