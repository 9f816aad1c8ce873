use std::path::Path;
use std::process::Output;

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USER_ID: u64 = 4242;

/// Run the CLI against a mock server with an isolated HOME, so no real
/// config file or git config is picked up.
pub async fn run_cli(server: &MockServer, home: &Path, args: &[&str]) -> Output {
    let api_url = format!("http://127.0.0.1:{}", server.address().port());
    tokio::process::Command::new(env!("CARGO_BIN_EXE_travis-activate"))
        .args([
            "--api-url",
            api_url.as_str(),
            "--token",
            "test-token",
            "--owner",
            "acme",
        ])
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("TRAVIS_TOKEN")
        .env_remove("TRAVIS_ACTIVATE_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute CLI")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Mount `GET /user` and a successful sync.
pub async fn mount_user(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@type": "user",
            "id": USER_ID,
            "login": "instructor"
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/user/{USER_ID}/sync")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@type": "user",
            "id": USER_ID,
            "is_syncing": true
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Repository JSON in the provider's standard representation.
pub fn repo(id: u64, slug: &str, active: bool) -> Value {
    let name = slug.split('/').next_back().unwrap_or(slug);
    json!({
        "@type": "repository",
        "@href": format!("/repo/{id}"),
        "@representation": "standard",
        "@permissions": { "activate": true, "admin": true, "create_request": true },
        "id": id,
        "name": name,
        "slug": slug,
        "active": active,
        "private": true,
        "owner": { "@type": "organization", "id": 111720, "login": "acme" },
        "default_branch": { "@type": "branch", "name": "master" }
    })
}

/// One listing page.
pub fn page(repos: Vec<Value>, offset: u32, total: u32, next: Option<(u32, u32)>) -> Value {
    let is_last = next.is_none();
    let next = match next {
        Some((limit, offset)) => json!({
            "@href": format!("/owner/acme/repos?limit={limit}&offset={offset}"),
            "limit": limit,
            "offset": offset
        }),
        None => Value::Null,
    };
    json!({
        "@type": "repositories",
        "@pagination": {
            "limit": 100,
            "offset": offset,
            "count": total,
            "is_first": offset == 0,
            "is_last": is_last,
            "next": next
        },
        "repositories": repos
    })
}
