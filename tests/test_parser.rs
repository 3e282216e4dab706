use staticd::http::parser::{ParseError, parse_request_line};

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let target = parse_request_line(req).unwrap();

    assert_eq!(target, b"index.html");
}

#[test]
fn test_parse_root_request_has_empty_target() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let target = parse_request_line(req).unwrap();

    assert_eq!(target, b"");
}

#[test]
fn test_parse_target_keeps_query_string() {
    let req = b"GET /search?q=rust HTTP/1.1\r\n\r\n";
    let target = parse_request_line(req).unwrap();

    assert_eq!(target, b"search?q=rust");
}

#[test]
fn test_parse_target_is_returned_undecoded() {
    let req = b"GET /a%20b.txt HTTP/1.1\r\n\r\n";
    let target = parse_request_line(req).unwrap();

    assert_eq!(target, b"a%20b.txt");
}

#[test]
fn test_parse_accepts_bare_http1_version() {
    let req = b"GET /file.txt HTTP/1\r\n\r\n";
    let target = parse_request_line(req).unwrap();

    assert_eq!(target, b"file.txt");
}

#[test]
fn test_parse_only_first_line_matters() {
    let req = b"GET /file.txt HTTP/1.1\r\nX-Garbage: \x00\xff\r\n\r\nbody bytes";
    let target = parse_request_line(req).unwrap();

    assert_eq!(target, b"file.txt");
}

#[test]
fn test_parse_rejects_non_get_methods() {
    for req in [
        b"POST /file.txt HTTP/1.1\r\n\r\n".as_slice(),
        b"PUT /file.txt HTTP/1.1\r\n\r\n".as_slice(),
        b"HEAD /file.txt HTTP/1.1\r\n\r\n".as_slice(),
        b"DELETE /file.txt HTTP/1.1\r\n\r\n".as_slice(),
    ] {
        assert!(matches!(
            parse_request_line(req),
            Err(ParseError::UnsupportedMethod)
        ));
    }
}

#[test]
fn test_parse_rejects_lowercase_get() {
    let req = b"get /file.txt HTTP/1.1\r\n\r\n";

    assert!(matches!(
        parse_request_line(req),
        Err(ParseError::UnsupportedMethod)
    ));
}

#[test]
fn test_parse_rejects_http2_version() {
    let req = b"GET /file.txt HTTP/2\r\n\r\n";

    assert!(matches!(
        parse_request_line(req),
        Err(ParseError::UnsupportedVersion)
    ));
}

#[test]
fn test_parse_rejects_missing_version() {
    let req = b"GET /file.txt";

    assert!(matches!(
        parse_request_line(req),
        Err(ParseError::MalformedRequestLine)
    ));
}

#[test]
fn test_parse_rejects_double_space_after_method() {
    let req = b"GET  /file.txt HTTP/1.1\r\n\r\n";

    assert!(matches!(
        parse_request_line(req),
        Err(ParseError::UnsupportedMethod)
    ));
}

#[test]
fn test_parse_rejects_space_in_target() {
    // The target ends at the first space, so "b.txt" sits where the
    // version belongs.
    let req = b"GET /a b.txt HTTP/1.1\r\n\r\n";

    assert!(matches!(
        parse_request_line(req),
        Err(ParseError::UnsupportedVersion)
    ));
}

#[test]
fn test_parse_rejects_missing_leading_slash() {
    let req = b"GET file.txt HTTP/1.1\r\n\r\n";

    assert!(matches!(
        parse_request_line(req),
        Err(ParseError::UnsupportedMethod)
    ));
}

#[test]
fn test_parse_rejects_empty_input() {
    assert!(parse_request_line(b"").is_err());
}
