//! Audit logging module
//!
//! Appends one entry per masking run. Original values are only ever written
//! as SHA-256 digests.

pub mod logger;

pub use logger::AuditLogger;
