/// Expense entry service interface
pub mod expense;
/// Reference data service interface
pub mod reference;
/// Report service interface
pub mod report;
