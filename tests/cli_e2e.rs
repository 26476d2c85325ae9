//! End-to-end tests that run the compiled binary.

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_help_describes_the_tool() {
    let mut cmd = Command::cargo_bin("webfetch").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetch URLs and download files"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("post"))
        .stdout(predicate::str::contains("download"));
}

#[test]
fn test_cli_version_prints_version() {
    let mut cmd = Command::cargo_bin("webfetch").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_unknown_flag_fails() {
    let mut cmd = Command::cargo_bin("webfetch").unwrap();
    cmd.args(["get", "https://example.com", "--nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--nope"));
}

#[test]
fn test_cli_get_prints_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/greeting");
        then.status(200).body("hello from the server");
    });

    let mut cmd = Command::cargo_bin("webfetch").unwrap();
    cmd.args(["get", &server.url("/greeting")])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello from the server"));
}

#[test]
fn test_cli_get_json_prints_status_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/data");
        then.status(200).body("payload");
    });

    let mut cmd = Command::cargo_bin("webfetch").unwrap();
    let output = cmd
        .args(["get", &server.url("/data"), "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["status"], 200);
    assert_eq!(parsed["content"]["Body"], "payload");
}

#[test]
fn test_cli_post_sends_data() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/submit").body("k=v");
        then.status(200).body("ok");
    });

    let mut cmd = Command::cargo_bin("webfetch").unwrap();
    cmd.args(["post", &server.url("/submit"), "-d", "k=v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));

    mock.assert();
}

#[test]
fn test_cli_download_prints_saved_path() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/file.txt");
        then.status(200).body("contents");
    });

    let temp_dir = tempfile::TempDir::new().unwrap();
    let dest = temp_dir.path().to_str().unwrap();

    let mut cmd = Command::cargo_bin("webfetch").unwrap();
    cmd.args(["download", &server.url("/file.txt"), "--dest", dest])
        .assert()
        .success()
        .stdout(predicate::str::contains("file.txt"));

    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("file.txt")).unwrap(),
        "contents"
    );
}

#[test]
fn test_cli_transport_failure_exits_nonzero() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut cmd = Command::cargo_bin("webfetch").unwrap();
    cmd.args(["get", &format!("http://127.0.0.1:{port}/")])
        .assert()
        .failure()
        .stdout(predicate::str::contains("network error"));
}
