//! A local HTTP responder standing in for the GitHub API in tests.

use std::collections::VecDeque;

use secrecy::SecretString;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::client::GitHubClient;

/// A canned answer: status code and JSON body.
pub(crate) type Reply = (u16, &'static str);

fn header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|i| i + 4)
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Reads one request and returns its request line, or `None` if the peer
/// closed the connection first.
async fn read_request(socket: &mut TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let head_len = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = header_end(&buf) {
            break end;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_len]).to_string();
    let total = head_len + content_length(&head);
    while buf.len() < total {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    head.lines().next().map(str::to_string)
}

/// Serves `replies` in order, one per connection, and returns the request
/// lines it received (e.g. `GET /user HTTP/1.1`).
pub(crate) async fn serve(replies: Vec<Reply>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_uri = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut replies = VecDeque::from(replies);
        let mut requests = Vec::new();

        while let Some((status, body)) = replies.pop_front() {
            let (mut socket, _) = listener.accept().await.unwrap();
            let Some(request) = read_request(&mut socket).await else {
                replies.push_front((status, body));
                continue;
            };
            requests.push(request);

            let response = format!(
                "HTTP/1.1 {status} Test\r\nconnection: close\r\ncontent-length: {}\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        }

        requests
    });

    (base_uri, handle)
}

/// A client pointed at a local responder.
pub(crate) fn client(base_uri: &str) -> GitHubClient {
    let token = SecretString::from("ghp_test".to_string());
    GitHubClient::new(&token, Some(base_uri)).unwrap()
}

pub(crate) const BAD_CREDENTIALS: &str =
    r#"{"message": "Bad credentials", "documentation_url": "https://docs.github.com/rest"}"#;

pub(crate) const ORGANIZATION: &str = r#"{"login": "acme", "id": 2}"#;

pub(crate) const NOT_FOUND: &str =
    r#"{"message": "Not Found", "documentation_url": "https://docs.github.com/rest"}"#;

pub(crate) const FORBIDDEN: &str = r#"{"message": "Must have admin rights to Repository."}"#;

pub(crate) const NAME_CONFLICT: &str = r#"{
    "message": "Repository creation failed.",
    "errors": [
        {
            "resource": "Repository",
            "code": "custom",
            "field": "name",
            "message": "name already exists on this account"
        }
    ],
    "documentation_url": "https://docs.github.com/rest/repos/repos"
}"#;

pub(crate) const INVALID_FIELD: &str = r#"{
    "message": "Validation Failed",
    "errors": [
        {"resource": "Repository", "code": "invalid", "field": "visibility"}
    ],
    "documentation_url": "https://docs.github.com/rest/repos/repos"
}"#;

pub(crate) const USER: &str = r#"{
    "login": "octocat",
    "id": 1,
    "node_id": "MDQ6VXNlcjE=",
    "avatar_url": "https://github.com/images/error/octocat_happy.gif",
    "gravatar_id": "",
    "url": "https://api.github.com/users/octocat",
    "html_url": "https://github.com/octocat",
    "followers_url": "https://api.github.com/users/octocat/followers",
    "following_url": "https://api.github.com/users/octocat/following{/other_user}",
    "gists_url": "https://api.github.com/users/octocat/gists{/gist_id}",
    "starred_url": "https://api.github.com/users/octocat/starred{/owner}{/repo}",
    "subscriptions_url": "https://api.github.com/users/octocat/subscriptions",
    "organizations_url": "https://api.github.com/users/octocat/orgs",
    "repos_url": "https://api.github.com/users/octocat/repos",
    "events_url": "https://api.github.com/users/octocat/events{/privacy}",
    "received_events_url": "https://api.github.com/users/octocat/received_events",
    "type": "User",
    "site_admin": false
}"#;
