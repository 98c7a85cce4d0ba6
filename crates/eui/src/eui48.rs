use crate::error::{EuiError, Result};
use crate::hex::{encode_grouped, encode_hex};
use crate::hwaddr::HardwareAddr;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Delimiter used by the canonical text form
pub const DEFAULT_DELIMITER: u8 = b':';

/// EUI-64 bytes 3 and 4 of an address expanded from an EUI-48
const EUI64_SENTINEL: [u8; 2] = [0xff, 0xfe];

/// Universal/local bit flipped by the EUI-48 to EUI-64 expansion
const LOCAL_BIT: u8 = 0x02;

/// 48-bit extended unique identifier (MAC address)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Eui48([u8; 6]);

impl Eui48 {
    /// Size in octets
    pub const LENGTH: usize = 6;

    /// Create an identifier from a byte array
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Get the underlying byte array
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Ungrouped lowercase hex, e.g. `123451526789`
    pub fn hex(&self) -> String {
        encode_hex(&self.0)
    }

    /// Encode as `group_size` octets per group joined by `delimiter`
    ///
    /// A group size that does not divide 6 is accepted and leaves a shorter
    /// final group: `encode(4, b'.')` gives `12345152.6789`.
    pub fn encode(&self, group_size: usize, delimiter: u8) -> Result<String> {
        if group_size == 0 {
            return Err(EuiError::InvalidArgument("group size must be at least 1"));
        }
        if !delimiter.is_ascii() {
            return Err(EuiError::InvalidArgument("delimiter must be an ASCII character"));
        }
        Ok(encode_grouped(&self.0, group_size, delimiter))
    }

    /// Normalize a 48 or 64 bit hardware address into an EUI-48
    ///
    /// A 64-bit address is only accepted when it was expanded from an EUI-48,
    /// i.e. carries `ff:fe` in bytes 3 and 4. The expansion is reversed by
    /// dropping the sentinel and flipping the universal/local bit.
    pub fn from_hw_addr(addr: &[u8]) -> Result<Self> {
        let mut out = [0u8; Self::LENGTH];
        match addr.len() * 8 {
            n if n == Self::LENGTH * 8 => out.copy_from_slice(addr),
            64 if addr[3..5] == EUI64_SENTINEL => {
                out[0..3].copy_from_slice(&addr[0..3]);
                out[3..6].copy_from_slice(&addr[5..8]);
                out[0] ^= LOCAL_BIT;
            }
            _ => return Err(EuiError::InvalidInput),
        }
        Ok(Self(out))
    }

    /// Parse a textual hardware address and normalize it
    pub fn parse(s: &str) -> Result<Self> {
        let addr = HardwareAddr::parse(s)?;
        Self::from_hw_addr(&addr)
    }

    /// Overwrite with a normalized hardware address, zeroed on failure
    pub fn fill_from_hw_addr(&mut self, addr: &[u8]) -> Result<()> {
        self.replace_with(Self::from_hw_addr(addr))
    }

    /// Overwrite with a parsed textual hardware address, zeroed on failure
    pub fn fill_from_str(&mut self, s: &str) -> Result<()> {
        self.replace_with(Self::parse(s))
    }

    fn replace_with(&mut self, parsed: Result<Self>) -> Result<()> {
        match parsed {
            Ok(eui) => {
                *self = eui;
                Ok(())
            }
            Err(e) => {
                *self = Self::default();
                Err(e)
            }
        }
    }
}

/// Unwrap a parse result for addresses known to be valid at the call site
///
/// # Panics
///
/// Panics with the error message when `result` is an error. Never use this on
/// untrusted input.
pub fn must_eui48(result: Result<Eui48>) -> Eui48 {
    match result {
        Ok(eui) => eui,
        Err(e) => panic!("{}", e),
    }
}

impl From<[u8; 6]> for Eui48 {
    fn from(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

impl From<Eui48> for [u8; 6] {
    fn from(eui: Eui48) -> Self {
        eui.0
    }
}

impl TryFrom<&[u8]> for Eui48 {
    type Error = EuiError;

    fn try_from(addr: &[u8]) -> Result<Self> {
        Self::from_hw_addr(addr)
    }
}

impl FromStr for Eui48 {
    type Err = EuiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Eui48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_grouped(&self.0, 1, DEFAULT_DELIMITER))
    }
}

impl Serialize for Eui48 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct Eui48Visitor;

impl<'de> Visitor<'de> for Eui48Visitor {
    type Value = Eui48;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hardware address string such as 12:34:51:52:67:89")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Eui48, E> {
        let mut eui = Eui48::default();
        eui.fill_from_str(v).map_err(E::custom)?;
        Ok(eui)
    }
}

impl<'de> Deserialize<'de> for Eui48 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_str(Eui48Visitor)
    }
}
