//! EUI-48 (MAC address) identifiers and their text encodings
//!
//! This library converts 6-byte identifiers to grouped lowercase hex text and
//! back, and normalizes 48 and 64 bit hardware addresses into the canonical
//! 6-byte form. It has no I/O and does not log.

pub mod error;
pub mod eui48;
pub mod hex;
pub mod hwaddr;

pub use error::{EuiError, Result};
pub use eui48::{must_eui48, Eui48, DEFAULT_DELIMITER};
pub use hwaddr::HardwareAddr;
