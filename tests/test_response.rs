use quay::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::NoContent.as_u16(), 204);
    assert_eq!(StatusCode::PartialContent.as_u16(), 206);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::Conflict.as_u16(), 409);
    assert_eq!(StatusCode::PreconditionFailed.as_u16(), 412);
    assert_eq!(StatusCode::UriTooLong.as_u16(), 414);
    assert_eq!(StatusCode::RangeNotSatisfiable.as_u16(), 416);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::PartialContent.reason_phrase(), "Partial Content");
    assert_eq!(
        StatusCode::PreconditionFailed.reason_phrase(),
        "Precondition Failed"
    );
    assert_eq!(StatusCode::UriTooLong.reason_phrase(), "URI Too Long");
    assert_eq!(
        StatusCode::RangeNotSatisfiable.reason_phrase(),
        "Range Not Satisfiable"
    );
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
}

#[test]
fn test_response_builder_basic() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("Hello, World!".as_bytes().to_vec())
        .build();

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(&response.body[..], b"Hello, World!");
}

#[test]
fn test_response_builder_auto_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .body("This is the body".as_bytes().to_vec())
        .build();

    assert_eq!(response.header("Content-Length").unwrap(), "16");
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body("test".as_bytes().to_vec())
        .build();

    assert_eq!(response.header("Content-Length").unwrap(), "999");
}

#[test]
fn test_response_builder_empty_body() {
    let response = ResponseBuilder::new(StatusCode::NoContent).build();

    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length").unwrap(), "0");
}

#[test]
fn test_response_headers_keep_insertion_order() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET,HEAD,OPTIONS")
        .build();

    let names: Vec<&str> = response.headers().iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["Content-Type", "Allow", "Content-Length"]);
}

#[test]
fn test_header_lookup_case_insensitive() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/html")
        .build();

    assert_eq!(response.header("content-type").unwrap(), "text/html");
}

#[test]
fn test_without_body_keeps_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .body("ABC".as_bytes().to_vec())
        .build()
        .without_body();

    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Length").unwrap(), "3");
    assert_eq!(response.header("Content-Type").unwrap(), "text/plain");
}

#[test]
fn test_internal_error_helper() {
    let response = Response::internal_error();

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert_eq!(&response.body[..], b"500 Internal Server Error");
}

#[test]
fn test_not_implemented_helper() {
    let response = Response::not_implemented();

    assert_eq!(response.status, StatusCode::NotImplemented);
    assert_eq!(&response.body[..], b"501 Not Implemented");
}
