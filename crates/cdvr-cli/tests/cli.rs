//! End-to-end tests for the cdvr_find_pass binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cdvr_find_pass() -> Command {
    Command::cargo_bin("cdvr_find_pass").expect("binary should be built")
}

async fn mount_listing(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[test]
fn missing_title_is_a_usage_error() {
    cdvr_find_pass()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn version_flag_prints_version_and_exits_zero() {
    cdvr_find_pass()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unreachable_server_reports_connection_error() {
    // Bind a port and drop it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    cdvr_find_pass()
        .args(["-t", "Nature", "-p", &port.to_string()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("connection error")
                .and(predicate::str::contains("no matching recording found").not()),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn single_match_prints_its_pass_name() {
    let server = MockServer::start().await;
    mount_listing(&server, "/dvr/jobs", json!([])).await;
    mount_listing(
        &server,
        "/dvr/files",
        json!([{
            "ID": "901",
            "RuleID": "42",
            "FileID": "901",
            "Airing": {"Title": "Nature", "SeasonNumber": 2, "EpisodeNumber": 3,
                       "Categories": ["Episode"]}
        }]),
    )
    .await;
    mount_listing(&server, "/dvr/rules", json!([{"ID": "42", "Name": "Nature pass"}])).await;
    let port = server.address().port();

    cdvr_find_pass()
        .args(["-t", "Nature", "-i", "127.0.0.1", "-p", &port.to_string()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("triggered by pass: \"Nature pass\"")
                .and(predicate::str::contains("| Library programs  |")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn no_match_exits_nonzero_without_pass_lookup() {
    let server = MockServer::start().await;
    mount_listing(&server, "/dvr/jobs", json!([])).await;
    mount_listing(
        &server,
        "/dvr/files",
        json!([{"ID": "902", "Airing": {"Title": "Nova"}}]),
    )
    .await;
    // A miss must not trigger pass resolution; verified on drop.
    Mock::given(method("GET"))
        .and(path("/dvr/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;
    let port = server.address().port();

    cdvr_find_pass()
        .args(["-t", "Nature", "-p", &port.to_string()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("no matching recording found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn season_and_episode_filters_narrow_the_match() {
    let server = MockServer::start().await;
    mount_listing(&server, "/dvr/jobs", json!([])).await;
    // Episode 3, but season 1: -e 3 -s 2 must not match it.
    mount_listing(
        &server,
        "/dvr/files",
        json!([{
            "ID": "903",
            "RuleID": "42",
            "FileID": "903",
            "Airing": {"Title": "Nature", "SeasonNumber": 1, "EpisodeNumber": 3}
        }]),
    )
    .await;
    let port = server.address().port();

    cdvr_find_pass()
        .args(["-t", "Nature", "-e", "3", "-s", "2", "-p", &port.to_string()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("no matching recording found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_response_reports_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dvr/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    let port = server.address().port();

    cdvr_find_pass()
        .args(["-t", "Nature", "-p", &port.to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("response error"));
}
