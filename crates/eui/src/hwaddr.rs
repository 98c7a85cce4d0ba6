use crate::error::{EuiError, Result};
use crate::hex::decode_octet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Octet counts accepted by the text parser (EUI-48, EUI-64, IPoIB)
const VALID_OCTET_COUNTS: [usize; 3] = [6, 8, 20];

/// Shortest accepted text form (six octets with delimiters)
const MIN_TEXT_LEN: usize = 14;

/// Variable-width hardware address as read off the wire or out of text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HardwareAddr(Vec<u8>);

impl HardwareAddr {
    /// Wrap raw address bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parse a hardware address in one of the following forms:
    ///
    /// ```text
    /// 00:00:5e:00:53:01
    /// 02:00:5e:10:00:00:00:01
    /// 00-00-5e-00-53-01
    /// 0000.5e00.5301
    /// ```
    ///
    /// Addresses of 6, 8 or 20 octets are accepted, digits are case-insensitive.
    pub fn parse(s: &str) -> Result<Self> {
        let text = s.as_bytes();
        let invalid = || EuiError::InvalidFormat(s.to_string());

        if text.len() < MIN_TEXT_LEN {
            return Err(invalid());
        }

        let bytes = if text[2] == b':' || text[2] == b'-' {
            parse_octet_groups(text, text[2])
        } else if text[4] == b'.' {
            parse_dotted_groups(text)
        } else {
            None
        };

        bytes.map(Self).ok_or_else(invalid)
    }
}

/// `xx:xx:...` or `xx-xx-...`, one delimiter throughout
fn parse_octet_groups(text: &[u8], delimiter: u8) -> Option<Vec<u8>> {
    if (text.len() + 1) % 3 != 0 {
        return None;
    }
    let count = (text.len() + 1) / 3;
    if !VALID_OCTET_COUNTS.contains(&count) {
        return None;
    }

    let mut bytes = Vec::with_capacity(count);
    for (i, group) in text.chunks(3).enumerate() {
        if i < count - 1 && group[2] != delimiter {
            return None;
        }
        bytes.push(decode_octet(group[0], group[1])?);
    }
    Some(bytes)
}

/// `xxxx.xxxx.xxxx`
fn parse_dotted_groups(text: &[u8]) -> Option<Vec<u8>> {
    if (text.len() + 1) % 5 != 0 {
        return None;
    }
    let count = 2 * (text.len() + 1) / 5;
    if !VALID_OCTET_COUNTS.contains(&count) {
        return None;
    }

    let mut bytes = Vec::with_capacity(count);
    for (i, group) in text.chunks(5).enumerate() {
        if i < count / 2 - 1 && group[4] != b'.' {
            return None;
        }
        bytes.push(decode_octet(group[0], group[1])?);
        bytes.push(decode_octet(group[2], group[3])?);
    }
    Some(bytes)
}

impl Deref for HardwareAddr {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for HardwareAddr {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl FromStr for HardwareAddr {
    type Err = EuiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HardwareAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
