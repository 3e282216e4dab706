use staticd::http::mime::from_extension;

#[test]
fn test_known_extensions() {
    assert_eq!(from_extension(b"html"), "text/html");
    assert_eq!(from_extension(b"htm"), "text/html");
    assert_eq!(from_extension(b"txt"), "text/plain");
    assert_eq!(from_extension(b"jpg"), "image/jpeg");
    assert_eq!(from_extension(b"jpeg"), "image/jpeg");
    assert_eq!(from_extension(b"png"), "image/png");
}

#[test]
fn test_matching_is_case_insensitive() {
    assert_eq!(from_extension(b"HTML"), "text/html");
    assert_eq!(from_extension(b"Txt"), "text/plain");
    assert_eq!(from_extension(b"JpEg"), "image/jpeg");
    assert_eq!(from_extension(b"PNG"), "image/png");
}

#[test]
fn test_unknown_extension_is_octet_stream() {
    assert_eq!(from_extension(b"pdf"), "application/octet-stream");
    assert_eq!(from_extension(b"rs"), "application/octet-stream");
}

#[test]
fn test_empty_extension_is_octet_stream() {
    assert_eq!(from_extension(b""), "application/octet-stream");
}

#[test]
fn test_non_utf8_extension_is_octet_stream() {
    assert_eq!(from_extension(&[0xff, 0xfe]), "application/octet-stream");
}
