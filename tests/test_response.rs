use bytes::Bytes;
use dynhttp::http::response::{ContentType, Response, SERVER_LINE, StatusCode};
use dynhttp::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    // The 404 phrase is deliberately non-standard.
    assert_eq!(StatusCode::NotFound.reason_phrase(), "File not found");
}

#[test]
fn test_content_type_strings() {
    assert_eq!(ContentType::Html.as_str(), "text/html");
    assert_eq!(ContentType::Csv.as_str(), "text/csv");
    assert_eq!(ContentType::Png.as_str(), "image/png");
    assert_eq!(ContentType::Json.as_str(), "application/json");
    assert_eq!(ContentType::JavaScript.as_str(), "text/javascript");
    assert_eq!(ContentType::Plain.as_str(), "text/plain");
}

#[test]
fn test_response_collects_chunks_in_order() {
    let resp = Response::ok(ContentType::Html)
        .with_chunk(Bytes::from_static(b"one"))
        .with_chunk(Bytes::from_static(b"two"));

    assert_eq!(resp.body.len(), 2);
    assert_eq!(resp.body_len(), 6);
}

#[test]
fn test_serialize_preamble() {
    let resp = Response::ok(ContentType::Html).with_chunk(Bytes::from_static(b"<html>"));
    let wire = serialize_response(&resp);
    let text = String::from_utf8(wire).unwrap();

    assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
    assert!(text.contains(SERVER_LINE));
    assert!(text.contains("Content-type: text/html\r\n\r\n"));
    assert!(text.ends_with("<html>"));
}

#[test]
fn test_serialize_not_found_status_line() {
    let resp = Response::new(StatusCode::NotFound, ContentType::Html);
    let wire = serialize_response(&resp);
    let text = String::from_utf8(wire).unwrap();

    assert!(text.starts_with("HTTP/1.0 404 File not found\r\n"));
}

#[test]
fn test_serialize_bad_request() {
    let resp = Response::new(StatusCode::BadRequest, ContentType::Plain)
        .with_chunk(Bytes::from_static(b"ERR\n"));
    let wire = serialize_response(&resp);
    let text = String::from_utf8(wire).unwrap();

    assert!(text.starts_with("HTTP/1.0 400 Bad Request\r\n"));
    assert!(text.contains("Content-type: text/plain\r\n\r\n"));
    assert!(text.ends_with("ERR\n"));
}

#[test]
fn test_serialize_body_segments_concatenate() {
    let resp = Response::ok(ContentType::Json)
        .with_chunk(Bytes::from_static(b"{\"val\":["))
        .with_chunk(Bytes::from_static(b"1,2"))
        .with_chunk(Bytes::from_static(b"]}"));
    let wire = serialize_response(&resp);
    let text = String::from_utf8(wire).unwrap();

    let body = text.split("\r\n\r\n").nth(1).unwrap();
    assert_eq!(body, "{\"val\":[1,2]}");
}
