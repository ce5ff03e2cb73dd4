use quay::http::request::RequestBuilder;

#[test]
fn test_builder_basic() {
    let request = RequestBuilder::new()
        .method("GET")
        .target("/index.html")
        .build()
        .unwrap();

    assert_eq!(request.method, "GET");
    assert_eq!(request.target, "/index.html");
    assert_eq!(request.path, "/index.html");
    assert_eq!(request.version, "HTTP/1.1"); // default
    assert!(request.query.is_empty());
    assert!(request.body.is_empty());
}

#[test]
fn test_builder_requires_method_and_target() {
    assert!(RequestBuilder::new().target("/").build().is_err());
    assert!(RequestBuilder::new().method("GET").build().is_err());
}

#[test]
fn test_builder_splits_target_into_path_and_query() {
    let request = RequestBuilder::new()
        .method("GET")
        .target("/files/a.txt?raw=1&download")
        .build()
        .unwrap();

    assert_eq!(request.path, "/files/a.txt");
    assert!(request.target.starts_with(&request.path));
    assert_eq!(request.query.len(), 2);
    assert_eq!(request.query[0].name, "raw");
    assert_eq!(request.query[0].value.as_deref(), Some("1"));
    assert_eq!(request.query[1].name, "download");
    assert_eq!(request.query[1].value, None);
}

#[test]
fn test_builder_preserves_duplicate_headers() {
    let request = RequestBuilder::new()
        .method("GET")
        .target("/")
        .header("If-Match", "\"abc\"")
        .header("If-Match", "\"def\"")
        .build()
        .unwrap();

    assert_eq!(request.header_values("If-Match"), vec!["\"abc\"", "\"def\""]);
}

#[test]
fn test_header_lookup_case_insensitive() {
    let request = RequestBuilder::new()
        .method("GET")
        .target("/")
        .header("Range", "bytes=0-1")
        .build()
        .unwrap();

    assert_eq!(request.header("range").unwrap(), "bytes=0-1");
    assert_eq!(request.header("RANGE").unwrap(), "bytes=0-1");
    assert!(request.header("If-Match").is_none());
}

#[test]
fn test_body_round_trips() {
    let request = RequestBuilder::new()
        .method("PUT")
        .target("/notes.txt")
        .body("new contents".as_bytes().to_vec())
        .build()
        .unwrap();

    assert_eq!(&request.body[..], b"new contents");
}
