//! MIME type detection based on file extensions.

/// Maps a file extension to a `Content-Type` value.
///
/// Total and pure; matching is ASCII case-insensitive. Unrecognized and
/// empty extensions map to `application/octet-stream`.
pub fn from_extension(ext: &[u8]) -> &'static str {
    if ext.eq_ignore_ascii_case(b"html") || ext.eq_ignore_ascii_case(b"htm") {
        "text/html"
    } else if ext.eq_ignore_ascii_case(b"txt") {
        "text/plain"
    } else if ext.eq_ignore_ascii_case(b"jpg") || ext.eq_ignore_ascii_case(b"jpeg") {
        "image/jpeg"
    } else if ext.eq_ignore_ascii_case(b"png") {
        "image/png"
    } else {
        "application/octet-stream"
    }
}
