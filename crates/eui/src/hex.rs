//! Lowercase hexadecimal encoding for hardware identifiers
//!
//! Output is written into a fixed-size stack buffer and only turned into a
//! `String` once complete. Violated preconditions (short destination, zero
//! group size, output larger than [`MAX_ENCODED_LEN`]) are caller bugs and
//! panic.

/// Hex digit alphabet, lowercase only
const HEX_TABLE: &[u8; 16] = b"0123456789abcdef";

/// Capacity of the stack buffer used by the encoders
pub const MAX_ENCODED_LEN: usize = 64;

/// Write `2 * src.len()` hex digits into `dst`, high nibble first
pub fn encode_big_endian(dst: &mut [u8], src: &[u8]) {
    assert!(
        dst.len() >= src.len() * 2,
        "hex destination too small: {} < {}",
        dst.len(),
        src.len() * 2
    );

    for (pair, byte) in dst.chunks_exact_mut(2).zip(src) {
        pair[0] = HEX_TABLE[(byte >> 4) as usize];
        pair[1] = HEX_TABLE[(byte & 0x0f) as usize];
    }
}

/// Number of characters produced by [`encode_grouped`]
pub fn encoded_len(len: usize, group: usize) -> usize {
    if len == 0 {
        0
    } else {
        len * 2 + (len - 1) / group
    }
}

/// Encode `bytes` as groups of `group` octets joined by `delimiter`
///
/// The final group is shorter when `group` does not divide `bytes.len()`.
pub fn encode_grouped(bytes: &[u8], group: usize, delimiter: u8) -> String {
    assert!(group > 0, "group size must be at least 1");

    let len = encoded_len(bytes.len(), group);
    assert!(
        len <= MAX_ENCODED_LEN,
        "encoded length {} exceeds buffer of {}",
        len,
        MAX_ENCODED_LEN
    );

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut pos = 0;
    for (i, chunk) in bytes.chunks(group).enumerate() {
        if i > 0 {
            buf[pos] = delimiter;
            pos += 1;
        }
        encode_big_endian(&mut buf[pos..], chunk);
        pos += chunk.len() * 2;
    }

    ascii_string(&buf[..len])
}

/// Encode `bytes` without any delimiter
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    let len = bytes.len() * 2;
    encode_big_endian(&mut buf[..len], bytes);
    ascii_string(&buf[..len])
}

/// Decode one octet from two hex digits, either case
pub fn decode_octet(hi: u8, lo: u8) -> Option<u8> {
    Some(decode_digit(hi)? << 4 | decode_digit(lo)?)
}

fn decode_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 0xa),
        b'A'..=b'F' => Some(c - b'A' + 0xa),
        _ => None,
    }
}

fn ascii_string(buf: &[u8]) -> String {
    buf.iter().copied().map(char::from).collect()
}
