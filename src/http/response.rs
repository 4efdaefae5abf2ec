use bytes::Bytes;

/// The protocol version every response is stamped with.
pub const HTTP_VERSION: &str = "HTTP/1.0";

/// Fixed server identification line, sent after the status line.
pub const SERVER_LINE: &str = "Server: dynhttp\r\n";

/// HTTP status codes emitted by the server.
///
/// - `Ok` (200): request parsed and the page was served
/// - `BadRequest` (400): the request line was malformed
/// - `NotFound` (404): no page handler matches the filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 File not found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use dynhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the reason phrase used on the wire.
    ///
    /// Note the non-standard 404 phrase; it is part of the wire contract.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "File not found",
        }
    }
}

/// Content types the server can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Csv,
    Png,
    Json,
    JavaScript,
    Plain,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Csv => "text/csv",
            ContentType::Png => "image/png",
            ContentType::Json => "application/json",
            ContentType::JavaScript => "text/javascript",
            ContentType::Plain => "text/plain",
        }
    }
}

/// A response ready to be serialized: the fixed three-line preamble plus
/// body segments.
///
/// The body is kept as a sequence of [`Bytes`] segments so static page
/// content is referenced rather than copied and dynamic parts are appended
/// in generation order.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: ContentType,
    pub body: Vec<Bytes>,
}

impl Response {
    pub fn new(status: StatusCode, content_type: ContentType) -> Self {
        Self {
            status,
            content_type,
            body: Vec::new(),
        }
    }

    /// Creates a 200 response with the given content type.
    pub fn ok(content_type: ContentType) -> Self {
        Self::new(StatusCode::Ok, content_type)
    }

    /// Appends a body segment.
    pub fn with_chunk(mut self, chunk: Bytes) -> Self {
        self.body.push(chunk);
        self
    }

    /// Total body length in bytes.
    pub fn body_len(&self) -> usize {
        self.body.iter().map(|c| c.len()).sum()
    }
}
