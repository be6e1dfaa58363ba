use docroot::http::buffer::ScratchBuffer;
use docroot::http::response::{Response, ResponseBuilder, StatusCode};
use docroot::http::writer::{serialize_response, write_head};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_response_builder_auto_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("13"));
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("999"));
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_response_builder_keeps_header_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "4")
        .header("Content-Type", "text/plain")
        .build();

    let names: Vec<&str> = response.headers.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, ["Content-Length", "Content-Type"]);
}

#[test]
fn test_response_builder_replaces_header_in_place() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .header("content-type", "text/html")
        .build();

    assert_eq!(response.headers[0].1, "text/html");
    assert_eq!(response.header("X-Custom"), Some("value"));
}

#[test]
fn test_internal_error_wire_format() {
    let bytes = serialize_response(&Response::internal_error());

    assert_eq!(
        bytes,
        b"HTTP/1.1 500 Internal Server Error\r\nServer: TG\r\nContent-Type: text/html\r\nContent-Length: 20\r\n\r\nSomething went wrong".to_vec()
    );
}

#[test]
fn test_not_found_wire_format() {
    let bytes = serialize_response(&Response::not_found());

    assert_eq!(
        bytes,
        b"HTTP/1.1 404 Not Found\r\nServer: TG\r\nContent-Type: text/html\r\nContent-Length: 28\r\n\r\nNothing here but us chickens".to_vec()
    );
}

#[test]
fn test_write_head_omits_body() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "3")
        .body(b"abc".to_vec())
        .build();
    let mut scratch = ScratchBuffer::new(1024);

    let len = write_head(&response, &mut scratch).unwrap();

    assert_eq!(scratch.as_bytes(), b"HTTP/1.1 200 OK\r\nContent-Length: 3\r\n\r\n");
    assert_eq!(len, scratch.len());
}

#[test]
fn test_write_head_fails_when_buffer_too_small() {
    let response = ResponseBuilder::new(StatusCode::Ok).build();
    let mut scratch = ScratchBuffer::new(8);

    assert!(write_head(&response, &mut scratch).is_err());
    assert!(scratch.is_empty());
}
