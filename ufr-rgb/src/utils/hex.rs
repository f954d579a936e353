//! Hexadecimal helpers used for display purposes.

use std::fmt::Write;

/// Convert a byte slice to upper case hex pairs joined by `:`.
///
/// Example: `&[0x04, 0xa1]` -> `"04:A1"`
pub fn bytes_to_hex_colon(bytes: &[u8]) -> String {
    bytes_to_hex_sep(bytes, ":")
}

/// Convert a byte slice to upper case hex pairs joined by `sep`.
pub fn bytes_to_hex_sep(bytes: &[u8], sep: &str) -> String {
    let mut s = String::with_capacity(bytes.len() * (2 + sep.len()));
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push_str(sep);
        }
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}
