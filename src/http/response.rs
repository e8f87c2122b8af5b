/// HTTP status codes produced by the server.
///
/// - `Ok` (200): file or not-found page served
/// - `NotFound` (404): default for every new response
/// - `InternalServerError` (500): the file could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use fileserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
        }
    }
}

/// One header line. Keys are not unique in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep their insertion order, which is also the order they are
/// written in. A fresh response is a 404 with `Content-Length: 0` and
/// `Content-Type: text/html` and no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in insertion order
    pub headers: Vec<Header>,
    /// Response body, written verbatim after the header block
    pub body: Option<Vec<u8>>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Starts from the same defaults as [`Response::new`].
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .body(b"{}".to_vec())
///     .build();
/// ```
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        let mut response = Response::new();
        response.status = status;
        Self { response }
    }

    /// Upserts a header, see [`Response::set_header`].
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.response.set_header(key, value);
        self
    }

    /// Sets the response body and its Content-Length.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.response.set_header("Content-Length", body.len().to_string());
        self.response.body = Some(body);
        self
    }

    pub fn build(self) -> Response {
        self.response
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    pub fn new() -> Self {
        Self {
            status: StatusCode::NotFound,
            headers: vec![
                Header {
                    key: "Content-Length".to_string(),
                    value: "0".to_string(),
                },
                Header {
                    key: "Content-Type".to_string(),
                    value: "text/html".to_string(),
                },
            ],
            body: None,
        }
    }

    /// Updates the first header whose key matches exactly, or appends a new
    /// one if none does.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.headers.iter_mut().find(|h| h.key == key) {
            Some(header) => header.value = value,
            None => self.headers.push(Header { key, value }),
        }
    }

    /// Returns the value of the first header whose key matches exactly.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.key == key)
            .map(|h| h.value.as_str())
    }

    /// Removes every header whose key matches exactly.
    pub fn remove_header(&mut self, key: &str) {
        self.headers.retain(|h| h.key != key);
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        ResponseBuilder::new(StatusCode::InternalServerError)
            .body(b"500 Internal Server Error".to_vec())
            .build()
    }
}
