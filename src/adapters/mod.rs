//! External system integrations for Tabmask.
//!
//! - [`csv`] - Headered CSV files read into and written from [`Record`](crate::domain::Record)s
//!
//! # Design Pattern
//!
//! Adapters isolate file formats from the masking engine. The engine only
//! ever sees a [`Record`](crate::domain::Record); supporting a new format
//! means adding an adapter, not touching the engine.
//!
//! ```rust,no_run
//! use tabmask::adapters::csv::{masked_output_path, read_record, write_record};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let record = read_record("people.csv")?;
//! write_record(masked_output_path("people.csv"), &record)?;
//! # Ok(())
//! # }
//! ```

pub mod csv;
