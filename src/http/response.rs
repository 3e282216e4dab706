use bytes::Bytes;

/// HTTP status codes produced by the server.
///
/// The server only ever answers with:
/// - `Ok` (200): File found and read
/// - `NotFound` (404): File missing or unreadable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use staticd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Value of the single `Content-Type` header
    pub content_type: &'static str,
    /// Response body as bytes
    pub body: Bytes,
}

impl Response {
    /// Creates a 200 OK response carrying a file's content.
    pub fn file(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type,
            body: Bytes::from(body),
        }
    }

    /// Creates the 404 Not Found response.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NotFound,
            content_type: "text/plain",
            body: Bytes::from_static(b"404 Not Found"),
        }
    }
}
