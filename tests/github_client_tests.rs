// GitHub client tests against a mock API server

use devscope::services::{GithubClient, GithubError, ProfileCache};
use mockito::Matcher;

fn user_body(server_url: &str, login: &str) -> String {
    serde_json::json!({
        "login": login,
        "id": 42,
        "name": "The Octocat",
        "avatar_url": "https://avatars.example/u/42",
        "created_at": "2018-05-01T10:00:00Z",
        "public_repos": 10,
        "followers": 50,
        "repos_url": format!("{}/users/{}/repos", server_url, login),
    })
    .to_string()
}

fn repos_body(count: usize) -> String {
    let repos: Vec<_> = (0..count)
        .map(|i| {
            let description = if i % 2 == 0 { None } else { Some("A tool") };
            let language = if i % 3 == 0 { None } else { Some("Rust") };
            serde_json::json!({
                "id": i,
                "name": format!("repo-{}", i),
                "description": description,
                "language": language,
                "stargazers_count": 1,
            })
        })
        .collect();
    serde_json::Value::Array(repos).to_string()
}

fn client_for(server: &mockito::ServerGuard) -> GithubClient {
    GithubClient::new(server.url(), None, "devscope-tests", 5).unwrap()
}

fn repos_query() -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("sort".into(), "updated".into()),
        Matcher::UrlEncoded("per_page".into(), "12".into()),
    ])
}

#[tokio::test]
async fn test_fetch_profile_success() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let user = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_body(&url, "octocat"))
        .create_async()
        .await;

    let repos = server
        .mock("GET", "/users/octocat/repos")
        .match_query(repos_query())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(repos_body(3))
        .create_async()
        .await;

    let fetched = client_for(&server).fetch_profile("octocat").await.unwrap();

    user.assert_async().await;
    repos.assert_async().await;

    assert_eq!(fetched.profile.login, "octocat");
    assert_eq!(fetched.profile.public_repos, 10);
    assert_eq!(fetched.repositories.len(), 3);
    assert!(fetched.repositories_complete);
    assert_eq!(fetched.repositories[0].description, None);
    assert_eq!(fetched.repositories[1].language.as_deref(), Some("Rust"));
}

#[tokio::test]
async fn test_repository_list_capped_at_twelve() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    server
        .mock("GET", "/users/prolific")
        .with_status(200)
        .with_body(user_body(&url, "prolific"))
        .create_async()
        .await;

    server
        .mock("GET", "/users/prolific/repos")
        .match_query(repos_query())
        .with_status(200)
        .with_body(repos_body(20))
        .create_async()
        .await;

    let fetched = client_for(&server).fetch_profile("prolific").await.unwrap();
    assert_eq!(fetched.repositories.len(), 12);
}

#[tokio::test]
async fn test_unknown_user_is_profile_not_found() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/users/ghost-user")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let err = client_for(&server).fetch_profile("ghost-user").await.unwrap_err();

    match err {
        GithubError::ProfileNotFound { handle, reason } => {
            assert_eq!(handle, "ghost-user");
            assert!(reason.contains("404"), "unexpected reason: {}", reason);
        }
        other => panic!("Expected ProfileNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_user_payload_is_profile_not_found() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/users/broken")
        .with_status(200)
        .with_body(r#"{"unexpected": true}"#)
        .create_async()
        .await;

    let err = client_for(&server).fetch_profile("broken").await.unwrap_err();
    assert!(matches!(err, GithubError::ProfileNotFound { .. }));
}

#[tokio::test]
async fn test_repository_failure_degrades_to_empty_list() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(user_body(&url, "octocat"))
        .create_async()
        .await;

    server
        .mock("GET", "/users/octocat/repos")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let fetched = client_for(&server).fetch_profile("octocat").await.unwrap();
    assert!(fetched.repositories.is_empty());
    assert!(!fetched.repositories_complete);
}

#[tokio::test]
async fn test_malformed_repository_payload_degrades() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(user_body(&url, "octocat"))
        .create_async()
        .await;

    server
        .mock("GET", "/users/octocat/repos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .create_async()
        .await;

    let fetched = client_for(&server).fetch_profile("octocat").await.unwrap();
    assert!(fetched.repositories.is_empty());
    assert!(!fetched.repositories_complete);
}

#[tokio::test]
async fn test_token_sent_as_bearer() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let user = server
        .mock("GET", "/users/octocat")
        .match_header("authorization", "Bearer secret-token")
        .match_header("user-agent", "devscope-tests")
        .with_status(200)
        .with_body(user_body(&url, "octocat"))
        .create_async()
        .await;

    server
        .mock("GET", "/users/octocat/repos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = GithubClient::new(url, Some("secret-token"), "devscope-tests", 5).unwrap();
    client.fetch_profile("octocat").await.unwrap();

    user.assert_async().await;
}

#[tokio::test]
async fn test_cache_serves_repeat_lookups() {
    let mut server = mockito::Server::new_async().await;
    let url = server.url();

    let user = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(user_body(&url, "octocat"))
        .expect(1)
        .create_async()
        .await;

    server
        .mock("GET", "/users/octocat/repos")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(repos_body(2))
        .create_async()
        .await;

    let client = client_for(&server);
    let cache = ProfileCache::new(10, 60);

    let first = cache.get_or_fetch(&client, "octocat").await.unwrap();
    let second = cache.get_or_fetch(&client, "OctoCat").await.unwrap();

    assert_eq!(first, second);
    user.assert_async().await;
}

#[tokio::test]
async fn test_foreign_repos_url_is_not_followed() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_body("https://elsewhere.example", "octocat"))
        .create_async()
        .await;

    let repos = server
        .mock("GET", "/users/octocat/repos")
        .match_query(repos_query())
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(repos_body(2))
        .create_async()
        .await;

    let client = GithubClient::new(server.url(), Some("secret-token"), "devscope-tests", 5).unwrap();
    let fetched = client.fetch_profile("octocat").await.unwrap();

    repos.assert_async().await;
    assert!(fetched.repositories_complete);
    assert_eq!(fetched.repositories.len(), 2);
}
