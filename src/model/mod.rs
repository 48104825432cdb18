/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
/// Expense entry records and field table
pub mod entry;
/// Table-driven field-name translation
pub mod mapping;
/// Expense report records and field table
pub mod report;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Tool-facing result envelope
pub mod result;
