use std::sync::Arc;
use std::time::Duration;

use farmgate_auth::{
    check_session, Authenticator, Credentials, FileTokenStore, LoginError, MemoryTokenStore,
    SessionState, SessionToken, Settings, TokenStore, GENERIC_LOGIN_FAILURE,
};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server_url: String) -> Settings {
    Settings {
        server_url,
        request_timeout_secs: 2,
        data_dir: None,
    }
}

fn authenticator(server_url: String, store: Arc<MemoryTokenStore>) -> Authenticator {
    Authenticator::new(&settings_for(server_url), store).unwrap()
}

#[tokio::test]
async fn test_successful_login_stores_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=correct"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "abc123",
            "token_type": "bearer",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let auth = authenticator(server.uri(), store.clone());

    let token = auth
        .login(Credentials::new("alice", "correct"))
        .await
        .unwrap();

    assert_eq!(token.as_str(), "abc123");
    assert_eq!(store.get().unwrap(), Some(SessionToken::new("abc123")));
    assert_eq!(check_session(store.as_ref()), SessionState::Authenticated);
    assert!(!auth.is_in_flight());
}

#[tokio::test]
async fn test_rejected_login_leaves_store_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "detail": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_token(SessionToken::new("previous")));
    let auth = authenticator(server.uri(), store.clone());

    let err = auth
        .login(Credentials::new("alice", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Rejected(_)));
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(store.get().unwrap(), Some(SessionToken::new("previous")));
}

#[tokio::test]
async fn test_rejection_without_detail_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let auth = authenticator(server.uri(), store.clone());

    let err = auth.login(Credentials::new("alice", "x")).await.unwrap_err();

    assert!(matches!(err, LoginError::Unexpected(_)));
    assert_eq!(err.user_message(), GENERIC_LOGIN_FAILURE);
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn test_malformed_success_body_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "abc123"
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let auth = authenticator(server.uri(), store.clone());

    let err = auth
        .login(Credentials::new("alice", "correct"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Unexpected(_)));
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn test_empty_credentials_are_submitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("username=&password="))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "detail": "Incorrect username or password" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let auth = authenticator(server.uri(), store);

    let err = auth.login(Credentials::new("", "")).await.unwrap_err();
    assert_eq!(err.user_message(), "Incorrect username or password");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind then drop a listener so the port is known to refuse connections
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = Arc::new(MemoryTokenStore::new());
    let auth = authenticator(format!("http://{}", addr), store.clone());

    let err = auth
        .login(Credentials::new("alice", "correct"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Network(_)));
    assert_eq!(err.user_message(), GENERIC_LOGIN_FAILURE);
    assert_eq!(store.get().unwrap(), None);
    assert!(!auth.is_in_flight());
}

#[tokio::test]
async fn test_storage_failure_on_success_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "abc123"
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set_unavailable(true);
    let auth = authenticator(server.uri(), store.clone());

    let err = auth
        .login(Credentials::new("alice", "correct"))
        .await
        .unwrap_err();

    assert!(matches!(err, LoginError::Storage(_)));
    store.set_unavailable(false);
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn test_second_login_while_pending_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "access_token": "abc123" }))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let auth = authenticator(server.uri(), store.clone());

    let (first, second) = tokio::join!(
        auth.login(Credentials::new("alice", "correct")),
        auth.login(Credentials::new("alice", "correct")),
    );

    assert_eq!(first.unwrap().as_str(), "abc123");
    assert!(matches!(second, Err(LoginError::InFlight)));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn test_cancelled_login_releases_in_flight_flag() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "access_token": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let auth = authenticator(server.uri(), store.clone());

    let result = tokio::time::timeout(
        Duration::from_millis(100),
        auth.login(Credentials::new("alice", "correct")),
    )
    .await;

    assert!(result.is_err());
    assert!(!auth.is_in_flight());
    assert_eq!(store.get().unwrap(), None);
}

#[tokio::test]
async fn test_logout_clears_store() {
    let store = Arc::new(MemoryTokenStore::with_token(SessionToken::new("abc123")));
    let auth = authenticator("http://localhost:8000".to_string(), store.clone());

    auth.logout().unwrap();
    auth.logout().unwrap();

    assert_eq!(store.get().unwrap(), None);
    assert_eq!(check_session(store.as_ref()), SessionState::Anonymous);
}

#[tokio::test]
async fn test_successful_login_persists_to_file_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "abc123",
            "token_type": "bearer",
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileTokenStore::new(dir.path().join("farmgate")).unwrap());
    let auth = Authenticator::new(&settings_for(server.uri()), store.clone()).unwrap();

    auth.login(Credentials::new("alice", "correct"))
        .await
        .unwrap();

    let json = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["accessToken"], "abc123");
    assert_eq!(check_session(store.as_ref()), SessionState::Authenticated);
}
