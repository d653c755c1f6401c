use waypoint_core::{ResolveError, Resolver, ShortCode};
use waypoint_resolver::HttpResolver;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn code(s: &str) -> ShortCode {
    ShortCode::new_unchecked(s)
}

async fn mock_lookup(server: &MockServer, short_code: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/redirect/{}", short_code)))
        .respond_with(response)
        .mount(server)
        .await;
}

fn resolver_for(server: &MockServer) -> HttpResolver {
    HttpResolver::new(format!("{}/redirect", server.uri())).unwrap()
}

#[tokio::test]
async fn resolves_destination_from_url_field() {
    let server = MockServer::start().await;
    mock_lookup(
        &server,
        "abc123",
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({ "url": "https://example.com/page" })),
    )
    .await;

    let destination = resolver_for(&server).resolve(&code("abc123")).await.unwrap();
    assert_eq!(destination, "https://example.com/page");
}

#[tokio::test]
async fn not_found_status_maps_to_not_found() {
    let server = MockServer::start().await;
    mock_lookup(&server, "missing", ResponseTemplate::new(404)).await;

    let err = resolver_for(&server)
        .resolve(&code("missing"))
        .await
        .unwrap_err();
    assert_eq!(err, ResolveError::NotFound);
}

#[tokio::test]
async fn server_error_maps_to_unreachable() {
    let server = MockServer::start().await;
    mock_lookup(&server, "abc123", ResponseTemplate::new(500)).await;

    let err = resolver_for(&server)
        .resolve(&code("abc123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Unreachable(_)));
}

#[tokio::test]
async fn connection_failure_maps_to_unreachable() {
    // Nothing listens here; the connection is refused.
    let resolver = HttpResolver::new("http://127.0.0.1:1/redirect").unwrap();

    let err = resolver.resolve(&code("abc123")).await.unwrap_err();
    assert!(matches!(err, ResolveError::Unreachable(_)));
}

#[tokio::test]
async fn missing_url_field_maps_to_malformed() {
    let server = MockServer::start().await;
    mock_lookup(
        &server,
        "abc123",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ttl": 3600 })),
    )
    .await;

    let err = resolver_for(&server)
        .resolve(&code("abc123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Malformed(_)));
}

#[tokio::test]
async fn empty_url_field_maps_to_malformed() {
    let server = MockServer::start().await;
    mock_lookup(
        &server,
        "abc123",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "url": "" })),
    )
    .await;

    let err = resolver_for(&server)
        .resolve(&code("abc123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Malformed(_)));
}

#[tokio::test]
async fn non_json_body_maps_to_malformed() {
    let server = MockServer::start().await;
    mock_lookup(
        &server,
        "abc123",
        ResponseTemplate::new(200).set_body_string("<html>nope</html>"),
    )
    .await;

    let err = resolver_for(&server)
        .resolve(&code("abc123"))
        .await
        .unwrap_err();
    assert!(matches!(err, ResolveError::Malformed(_)));
}
