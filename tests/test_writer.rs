use fileserve::http::parser::parse_http_request;
use fileserve::http::response::{Response, StatusCode};
use fileserve::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_serialize_default_response() {
    let bytes = serialize_response(&Response::new());

    assert_eq!(
        bytes,
        b"HTTP/1.1 404\r\nContent-Length: 0\r\nContent-Type: text/html\r\n\r\n".to_vec()
    );
}

#[test]
fn test_serialize_with_body() {
    let mut response = Response::new();
    response.status = StatusCode::Ok;
    response.set_header("Content-Type", "text/css");
    response.set_header("Content-Length", "15");
    response.body = Some(b"body{color:red}".to_vec());

    assert_eq!(
        serialize_response(&response),
        b"HTTP/1.1 200\r\nContent-Length: 15\r\nContent-Type: text/css\r\n\r\nbody{color:red}".to_vec()
    );
}

#[test]
fn test_serialize_without_headers() {
    let mut response = Response::new();
    response.headers.clear();

    assert_eq!(serialize_response(&response), b"HTTP/1.1 404\r\n\r\n\r\n".to_vec());
}

#[test]
fn test_serialize_binary_body_verbatim() {
    let mut response = Response::new();
    response.body = Some(vec![0, 159, 146, 150]);

    let bytes = serialize_response(&response);
    assert!(bytes.ends_with(&[b'\n', 0, 159, 146, 150]));
}

#[test]
fn test_status_and_headers_survive_reparse() {
    let mut response = Response::new();
    response.status = StatusCode::Ok;
    response.set_header("Content-Type", "application/json");
    response.set_header("X-Trace", "abc");

    let text = String::from_utf8(serialize_response(&response)).unwrap();
    let reparsed = parse_http_request(&text);

    // The status line parses as "<version> <code>"
    assert_eq!(reparsed.method.as_str(), "HTTP/1.1");
    assert_eq!(reparsed.url.parse::<u16>().unwrap(), 200);
    assert_eq!(reparsed.headers.len(), response.headers.len());
    for header in &response.headers {
        assert_eq!(reparsed.header(&header.key), Some(header.value.as_str()));
    }
}

#[tokio::test]
async fn test_response_writer_writes_everything() {
    let mut response = Response::new();
    response.body = Some(vec![b'x'; 64 * 1024]);
    let expected = serialize_response(&response);

    let mut writer = ResponseWriter::new(&response);
    assert_eq!(writer.remaining(), expected.len());

    let mut out = Vec::new();
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(writer.remaining(), 0);
    assert_eq!(out, expected);
}
