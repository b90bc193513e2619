//! Accounting report logic for Tesoreria.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Sign conventions, aggregation rules and period calculations live here.
//!
//! # Modules
//!
//! - `reports` - Income statement, waterfall summary and balance sheet generation

pub mod reports;
