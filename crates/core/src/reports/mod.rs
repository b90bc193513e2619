//! Accounting report generation.
//!
//! This module provides pure business logic for generating financial reports:
//! - Income Statement (estado de resultados)
//! - Waterfall Summary (estado de resultados en cascada)
//! - Balance Sheet (balance general)
//!
//! The generators in [`ReportService`] work on pre-aggregated
//! [`AccountTotals`] rows, which is what the SQL layer returns. The
//! [`aggregate`] functions produce those same rows from raw ledger lines.

pub mod aggregate;
pub mod error;
pub mod period;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use period::DateRange;
pub use service::ReportService;
pub use types::*;
