//! Fixed-width binary string helpers
//!
//! The server right-pads `binary(n)` values with zero bytes. Display trims
//! that padding again; a payload that legitimately ends in zero bytes loses
//! them too.

/// Strip trailing zero bytes
pub fn trim_binary_padding(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|byte| *byte != 0)
        .map_or(0, |index| index + 1);
    &bytes[..end]
}

/// Right-pad with zero bytes up to `width`. Longer input is returned as is.
pub fn restore_binary_padding(bytes: &[u8], width: usize) -> Vec<u8> {
    let mut padded = bytes.to_vec();
    if padded.len() < width {
        padded.resize(width, 0);
    }
    padded
}

/// Display text for a fixed-width binary value
pub fn binary_to_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(trim_binary_padding(bytes)).into_owned()
}
