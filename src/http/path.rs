//! Percent-decoding of request targets and extension extraction.

/// Percent-decodes a request target into filesystem path bytes.
///
/// Single left-to-right pass: `%XY` with two hex digits becomes the byte
/// `0xXY`; every other byte is copied through unchanged. A `%` with fewer
/// than two bytes remaining after it is copied verbatim, as is a `%` whose
/// following two bytes are not both hex digits (scanning then resumes at
/// the next byte).
///
/// No normalization and no traversal protection: `..` segments and
/// absolute paths pass through unchanged.
pub fn percent_decode(target: &[u8]) -> Vec<u8> {
    let mut decoded = Vec::with_capacity(target.len());
    let mut i = 0;

    while i < target.len() {
        if target[i] == b'%' && i + 2 < target.len() {
            if let (Some(hi), Some(lo)) = (hex_value(target[i + 1]), hex_value(target[i + 2])) {
                decoded.push(hi << 4 | lo);
                i += 3;
                continue;
            }
        }
        decoded.push(target[i]);
        i += 1;
    }

    decoded
}

/// Returns the bytes after the last `.` in `path`.
///
/// Empty when there is no dot, when the dot is the last byte, or when the
/// last dot is the path's first byte (a name like `.bashrc` has no
/// extension; `dir/.hidden` yields `hidden`).
pub fn extension(path: &[u8]) -> &[u8] {
    match path.iter().rposition(|&b| b == b'.') {
        None | Some(0) => b"",
        Some(dot) => &path[dot + 1..],
    }
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
