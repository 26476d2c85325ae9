//! Integration tests for GET/POST request behavior against a mock server.

use httpmock::prelude::*;
use webfetch::{Client, RequestOptions, StatusCode, TransferError};

#[test]
fn test_get_returns_status_headers_and_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/page");
        then.status(200)
            .header("Content-Type", "text/html")
            .header("X-Request-Id", "req-42")
            .body("<html>hello</html>");
    });

    let client = Client::new();
    let response = client.get(&server.url("/page"));

    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers.get("content-type"), Some("text/html"));
    assert_eq!(response.headers.get("X-REQUEST-ID"), Some("req-42"));
    assert_eq!(response.text(), Some("<html>hello</html>"));
}

#[test]
fn test_post_body_arrives_byte_identical() {
    let payload = "name=caf\u{e9}&note=a:b:c";
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/form").body(payload);
        then.status(200).body("accepted");
    });

    let client = Client::new();
    let options = RequestOptions {
        body: Some(payload.to_string()),
        ..RequestOptions::default()
    };
    let response = client.post_with(&server.url("/form"), &options);

    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), Some("accepted"));
}

#[test]
fn test_get_can_carry_a_body() {
    let server = MockServer::start();
    // httpmock refuses a declarative body matcher on GET, so match the
    // recorded request by hand.
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .matches(|req| req.body.as_deref() == Some(b"lookup this".as_slice()));
        then.status(200).body("found");
    });

    let client = Client::new();
    let options = RequestOptions {
        body: Some("lookup this".to_string()),
        ..RequestOptions::default()
    };
    let response = client.get_with(&server.url("/query"), &options);

    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
}

#[test]
fn test_client_error_status_is_returned_with_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("nothing here");
    });

    let client = Client::new();
    let response = client.get(&server.url("/missing"));

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.text(), Some("nothing here"));
    assert!(!response.is_success());
    assert!(!response.is_timeout());
}

#[test]
fn test_server_error_status_is_returned_with_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/broken");
        then.status(500).body("boom");
    });

    let client = Client::new();
    let response = client.post(&server.url("/broken"));

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), Some("boom"));
}

#[test]
fn test_timeout_produces_none_status_with_empty_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/slow");
        then.status(200)
            .body("too late")
            .delay(std::time::Duration::from_millis(400));
    });

    let client = Client::new();
    let options = RequestOptions {
        timeout_secs: 0.05,
        ..RequestOptions::default()
    };
    let response = client.get_with(&server.url("/slow"), &options);

    assert_eq!(response.status, StatusCode::NONE);
    assert!(response.is_timeout());
    assert!(response.headers.is_empty());
    assert_eq!(response.text(), Some(""));
}

#[test]
fn test_connection_refused_produces_undefined_error_with_message() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = Client::new();
    let response = client.get(&format!("http://127.0.0.1:{port}/"));

    assert_eq!(response.status, StatusCode::UNDEFINED_ERROR);
    assert!(response.headers.is_empty());
    let message = response.text().unwrap();
    assert!(
        message.contains("network error"),
        "Expected failure description, got: {message}"
    );
}

#[test]
fn test_try_get_surfaces_typed_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = Client::new();
    let url = format!("http://127.0.0.1:{port}/");
    let result = client.try_get(&url, &RequestOptions::default());

    match result {
        Err(TransferError::Network { url: failed, .. }) => assert_eq!(failed, url),
        other => panic!("Expected Network error, got: {other:?}"),
    }
}

#[test]
fn test_custom_headers_are_sent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/with-headers")
            .header("Accept", "application/json")
            .header("X-Token", "secret");
        then.status(200);
    });

    let client = Client::new();
    let options = RequestOptions {
        headers: vec![
            "Accept: application/json".to_string(),
            "X-Token: secret".to_string(),
        ],
        ..RequestOptions::default()
    };
    let response = client.get_with(&server.url("/with-headers"), &options);

    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
}

#[test]
fn test_malformed_header_lines_are_dropped_silently() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/lenient").header("X-Kept", "yes");
        then.status(200);
    });

    let client = Client::new();
    let options = RequestOptions {
        headers: vec![
            "X-Kept: yes".to_string(),
            "no colon at all".to_string(),
            "Referer: https://example.com/page".to_string(),
        ],
        ..RequestOptions::default()
    };
    let response = client.get_with(&server.url("/lenient"), &options);

    // The request still goes through with only the well-formed header.
    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
}

#[test]
fn test_default_user_agent_identifies_the_tool() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ua")
            .header("User-Agent", webfetch::default_user_agent());
        then.status(200);
    });

    let client = Client::new();
    let response = client.get(&server.url("/ua"));

    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
}

#[test]
fn test_header_line_user_agent_overrides_default() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ua-override")
            .header("User-Agent", webfetch::user_agent::APPLE_TV);
        then.status(200);
    });

    let client = Client::new();
    let options = RequestOptions {
        headers: vec![format!("User-Agent: {}", webfetch::user_agent::APPLE_TV)],
        ..RequestOptions::default()
    };
    let response = client.get_with(&server.url("/ua-override"), &options);

    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
}

#[test]
fn test_user_agent_value_with_colon_is_dropped_as_malformed() {
    // GOOGLE_BOT contains "http://", so the line splits into more than two
    // colon parts and the override is dropped; the default UA goes out.
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/ua-colon")
            .header("User-Agent", webfetch::default_user_agent());
        then.status(200);
    });

    let client = Client::new();
    let options = RequestOptions {
        headers: vec![format!("User-Agent: {}", webfetch::user_agent::GOOGLE_BOT)],
        ..RequestOptions::default()
    };
    let response = client.get_with(&server.url("/ua-colon"), &options);

    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
}

#[test]
fn test_content_type_header_line_is_applied() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/typed")
            .header("Content-Type", webfetch::content_type::APPLICATION_JSON);
        then.status(200);
    });

    let client = Client::new();
    let options = RequestOptions {
        headers: vec![format!(
            "Content-Type: {}",
            webfetch::content_type::APPLICATION_JSON
        )],
        body: Some("{}".to_string()),
        ..RequestOptions::default()
    };
    let response = client.post_with(&server.url("/typed"), &options);

    mock.assert();
    assert_eq!(response.status, StatusCode::OK);
}

#[test]
fn test_nonstandard_status_code_is_preserved() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/teapot");
        then.status(418).body("short and stout");
    });

    let client = Client::new();
    let response = client.get(&server.url("/teapot"));

    assert_eq!(response.status, StatusCode::IM_A_TEAPOT);
    assert_eq!(response.status.code(), 418);
}
