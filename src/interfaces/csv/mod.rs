//! CSV adapters: expenses in, settlements and balances out.

pub mod expense_reader;
pub mod report_writer;
