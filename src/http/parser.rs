#[derive(Debug)]
pub enum ParseError {
    /// The request does not start with `GET /`.
    UnsupportedMethod,
    /// No space terminates the target.
    MalformedRequestLine,
    /// The version following the target is not an `HTTP/1` variant.
    UnsupportedVersion,
}

/// Extracts the request target from the first line of the received bytes.
///
/// Recognizes exactly `GET /<target> HTTP/1` anchored at the start of the
/// buffer, where `<target>` is the (possibly empty) run of non-space bytes
/// after the slash. Returns the target undecoded. Headers and body are
/// ignored.
pub fn parse_request_line(buf: &[u8]) -> Result<&[u8], ParseError> {
    let rest = buf
        .strip_prefix(b"GET /")
        .ok_or(ParseError::UnsupportedMethod)?;

    let end = rest
        .iter()
        .position(|&b| b == b' ')
        .ok_or(ParseError::MalformedRequestLine)?;

    let (target, rest) = rest.split_at(end);
    if !rest[1..].starts_with(b"HTTP/1") {
        return Err(ParseError::UnsupportedVersion);
    }

    Ok(target)
}
