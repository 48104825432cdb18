/// Expense entry service implementation
pub mod expense_service;
/// Reference data service implementation
pub mod reference_service;
/// Expense report service implementation
pub mod report_service;
/// Endpoint paths and path helpers
pub mod types;

pub use crate::application::interfaces::expense::*;
pub use crate::application::interfaces::reference::*;
pub use crate::application::interfaces::report::*;
pub use types::*;
