use crate::http::request::{Method, Request};
use std::collections::HashMap;

/// Accumulates the lines following the request line.
#[derive(Default)]
struct HeadersAndBody {
    headers: HashMap<String, Option<String>>,
    body: Option<String>,
}

impl HeadersAndBody {
    fn push_line(mut self, line: &str) -> Self {
        if let Some(body) = self.body.as_mut() {
            body.push_str(line);
            return self;
        }

        if line.is_empty() {
            self.body = Some(String::new());
            return self;
        }

        let mut parts = line.split(": ");
        let key = parts.next().unwrap_or_default();
        let value = parts.next();
        self.headers.insert(key.to_string(), value.map(str::to_string));
        self
    }
}

/// Parses the text of one complete request.
///
/// Parsing is best effort and never fails: missing request line parts become
/// empty strings and malformed header lines are stored without a value.
pub fn parse_http_request(text: &str) -> Request {
    let mut lines = text.split("\r\n");

    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split(' ');

    let method = Method::from(parts.next().unwrap_or_default());
    let url = parts.next().unwrap_or_default().to_string();
    let version = parts.next().unwrap_or_default().to_string();

    let HeadersAndBody { headers, body } =
        lines.fold(HeadersAndBody::default(), HeadersAndBody::push_line);

    Request {
        method,
        url,
        version,
        headers,
        body,
    }
}
