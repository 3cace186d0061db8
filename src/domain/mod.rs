//! Domain models and types for Tabmask.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Tabular data** ([`Record`], [`Column`], [`CellValue`])
//! - **Error types** ([`MaskError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use tabmask::domain::{CellValue, Column, Record};
//!
//! # fn example() -> tabmask::domain::Result<()> {
//! let record = Record::new(vec![
//!     Column::new("Name", vec![CellValue::text("Aisyah")]),
//!     Column::new("Age", vec![CellValue::Integer(29)]),
//! ])?;
//! assert_eq!(record.row_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod record;
pub mod result;

pub use errors::MaskError;
pub use record::{CellValue, Column, Record, ValueKind};
pub use result::Result;
