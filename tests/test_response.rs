use fileserve::http::response::{Header, Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_new_response_defaults() {
    let response = Response::new();

    assert_eq!(response.status, StatusCode::NotFound);
    assert_eq!(
        response.headers,
        vec![
            Header { key: "Content-Length".to_string(), value: "0".to_string() },
            Header { key: "Content-Type".to_string(), value: "text/html".to_string() },
        ]
    );
    assert_eq!(response.body, None);
}

#[test]
fn test_set_header_updates_in_place() {
    let mut response = Response::new();
    response.set_header("Content-Type", "text/css");
    response.set_header("Content-Length", "15");

    let keys: Vec<_> = response.headers.iter().map(|h| h.key.as_str()).collect();
    assert_eq!(keys, vec!["Content-Length", "Content-Type"]);
    assert_eq!(response.header("Content-Length"), Some("15"));
    assert_eq!(response.header("Content-Type"), Some("text/css"));
}

#[test]
fn test_set_header_appends_new_key() {
    let mut response = Response::new();
    response.set_header("X-Custom", "value");

    assert_eq!(response.headers.len(), 3);
    assert_eq!(response.headers[2].key, "X-Custom");
}

#[test]
fn test_set_header_is_case_sensitive() {
    let mut response = Response::new();
    response.set_header("content-type", "text/plain");

    assert_eq!(response.headers.len(), 3);
    assert_eq!(response.header("Content-Type"), Some("text/html"));
    assert_eq!(response.header("content-type"), Some("text/plain"));
}

#[test]
fn test_set_header_updates_first_duplicate_only() {
    let mut response = Response::new();
    response.headers.push(Header { key: "X-Dup".to_string(), value: "a".to_string() });
    response.headers.push(Header { key: "X-Dup".to_string(), value: "b".to_string() });

    response.set_header("X-Dup", "c");

    assert_eq!(response.headers[2].value, "c");
    assert_eq!(response.headers[3].value, "b");
}

#[test]
fn test_remove_header() {
    let mut response = Response::new();
    response.remove_header("Content-Type");

    assert_eq!(response.headers.len(), 1);
    assert_eq!(response.header("Content-Type"), None);
}

#[test]
fn test_response_builder_sets_body_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "application/json")
        .body(b"{}".to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Length"), Some("2"));
    assert_eq!(response.header("Content-Type"), Some("application/json"));
    assert_eq!(response.body, Some(b"{}".to_vec()));
}

#[test]
fn test_response_internal_error_helper() {
    let response = Response::internal_error();

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert_eq!(response.body, Some(b"500 Internal Server Error".to_vec()));
    assert_eq!(response.header("Content-Length"), Some("25"));
}
