//! Integration tests for the Gotham server

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    routing::get,
    Router,
};
use gotham_domain::fallback::ASK_BATMAN_FAILURE;
use gotham_domain::WisdomKind;
use gotham_feeds::{Feeds, FeedsConfig};
use gotham_gate::{GateConfig, GateStore, DENIED_MESSAGE};
use gotham_llm::MockProvider;
use gotham_oracle::{build_prompt, Oracle, OracleConfig};
use gotham_server::{
    handlers::{create_router, AppState, ErrorResponse, LivenessResponse, WisdomResponse},
    pages::{ExchangeView, GatePrompt},
    session::SessionManager,
    with_crash_boundary, CRASH_MESSAGE,
};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use tower::ServiceExt; // for oneshot
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCESS_KEY: &str = "open-sesame";

/// Helper to create test application state
fn create_test_state(provider: MockProvider, feeds_config: FeedsConfig) -> AppState {
    let oracle = Oracle::new(Arc::new(provider), OracleConfig::default());
    let (feeds, _worker) = Feeds::new(&feeds_config, oracle.clone()).unwrap();

    AppState {
        gate: Arc::new(GateStore::new(GateConfig::new(ACCESS_KEY)).unwrap()),
        sessions: Arc::new(SessionManager::new("test-secret-key", None)),
        oracle,
        feeds,
        announcements: Arc::new(RwLock::new(Vec::new())),
    }
}

fn default_state() -> AppState {
    create_test_state(MockProvider::failing(), FeedsConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(json.to_string())).unwrap()
}

/// Pass the gate and return the `name=value` cookie pair
async fn pass_gate(app: &Router) -> String {
    let body = format!(r#"{{"access_key": "{}"}}"#, ACCESS_KEY);
    let response = send(app, post_json("/access", &body, None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_restricted_pages_require_gate() {
    let app = create_router(default_state());

    for uri in [
        "/justice",
        "/finance",
        "/health",
        "/askbatman",
        "/missions",
        "/donate",
        "/tools",
        "/announcements",
    ] {
        let response = send(&app, get_request(uri, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);

        let prompt: GatePrompt = body_json(response).await;
        assert_eq!(prompt.title, "RESTRICTED ACCESS");
        assert!(!prompt.authenticated);
    }
}

#[tokio::test]
async fn test_gate_flow() {
    let state = default_state();
    let app = create_router(state.clone());

    let cookie = pass_gate(&app).await;
    assert!(cookie.starts_with("gotham_session="));
    assert!(state.gate.is_authenticated());

    let response = send(&app, get_request("/missions", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Gate open, but no cookie
    let response = send(&app, get_request("/missions", None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, get_request("/access", Some(&cookie))).await;
    let prompt: GatePrompt = body_json(response).await;
    assert!(prompt.authenticated);

    let response = send(&app, post_json("/logout", "", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = response.headers().get(header::SET_COOKIE).unwrap();
    assert!(cleared.to_str().unwrap().contains("Max-Age=0"));
    assert!(!state.gate.is_authenticated());

    // Logout closes the gate for every visitor
    let response = send(&app, get_request("/missions", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_key_is_denied() {
    let state = default_state();
    let app = create_router(state.clone());

    for _ in 0..3 {
        let response = send(&app, post_json("/access", r#"{"access_key": "joker"}"#, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let prompt: GatePrompt = body_json(response).await;
        assert_eq!(prompt.error.as_deref(), Some(DENIED_MESSAGE));
        assert_eq!(prompt.access_key, "");
    }
    assert!(!state.gate.is_authenticated());
}

#[tokio::test]
async fn test_wrong_key_does_not_close_open_gate() {
    let app = create_router(default_state());
    let cookie = pass_gate(&app).await;

    let response = send(&app, post_json("/access", r#"{"access_key": "riddler"}"#, None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(&app, get_request("/tools", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_forged_cookie_is_rejected() {
    let app = create_router(default_state());
    pass_gate(&app).await;

    let response = send(&app, get_request("/justice", Some("gotham_session=forged"))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wisdom_function_uses_one_prompt_per_kind() {
    let mut provider = MockProvider::failing();
    for kind in WisdomKind::ALL {
        provider.add_response(build_prompt(kind), format!("  reply for {}\n", kind.as_str()));
    }
    let recorder = provider.clone();
    let app = create_router(create_test_state(provider, FeedsConfig::default()));

    for kind in WisdomKind::ALL {
        let body = format!(r#"{{"type": "{}"}}"#, kind.as_str());
        let response = send(&app, post_json("/functions/batman-wisdom", &body, None)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let wisdom: WisdomResponse = body_json(response).await;
        assert_eq!(wisdom.response, format!("  reply for {}\n", kind.as_str()));
    }

    let requests = recorder.requests();
    assert_eq!(requests.len(), WisdomKind::ALL.len());
    for (i, a) in requests.iter().enumerate() {
        for b in &requests[i + 1..] {
            assert_ne!(a.user, b.user);
        }
    }
}

#[tokio::test]
async fn test_wisdom_function_rejects_unknown_type() {
    let recorder = MockProvider::new("unused");
    let app = create_router(create_test_state(recorder.clone(), FeedsConfig::default()));

    for body in [r#"{"type": "jokerPlan"}"#, r#"{}"#, "not json"] {
        let response = send(&app, post_json("/functions/batman-wisdom", body, None)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", body);
    }

    let response = send(
        &app,
        post_json("/functions/batman-wisdom", r#"{"type": "jokerPlan"}"#, None),
    )
    .await;
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.error, "Invalid type specified");
    assert_eq!(recorder.call_count(), 0);
}

#[tokio::test]
async fn test_wisdom_function_upstream_failure() {
    let app = create_router(default_state());

    let response = send(
        &app,
        post_json("/functions/batman-wisdom", r#"{"type": "askBatman"}"#, None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let error: ErrorResponse = body_json(response).await;
    assert!(!error.error.is_empty());
}

#[tokio::test]
async fn test_pages_render_fallback_content() {
    let app = create_router(default_state());
    let cookie = pass_gate(&app).await;

    let response = send(&app, get_request("/justice", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page: Value = body_json(response).await;
    assert_eq!(page["title"], "JUSTICE PROTOCOLS");
    assert_eq!(page["wisdom"].as_array().unwrap().len(), 4);
    assert!(page["notices"].as_array().unwrap().is_empty());

    let response = send(&app, get_request("/finance?mode=wayne", Some(&cookie))).await;
    let page: Value = body_json(response).await;
    assert_eq!(page["title"], "GOTHAM FINANCE");
    assert_eq!(page["mode"], "wayne");
    assert_eq!(page["tips"].as_array().unwrap().len(), 3);

    let response = send(&app, get_request("/health", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get_request("/donate", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get_request("/tools?category=finance", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_home_is_public() {
    let app = create_router(default_state());

    let response = send(&app, get_request("/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page: Value = body_json(response).await;
    assert_eq!(page["title"], "BATCOIN");
    assert_eq!(page["restricted"], true);
}

#[tokio::test]
async fn test_ask_batman() {
    let provider = MockProvider::new("Fear is a tool.");
    let app = create_router(create_test_state(provider, FeedsConfig::default()));
    let cookie = pass_gate(&app).await;

    let response = send(
        &app,
        post_json("/askbatman", r#"{"question": "How do I face fear?"}"#, Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let exchange: ExchangeView = body_json(response).await;
    assert!(!exchange.degraded);
    assert_eq!(exchange.exchange.len(), 2);
    assert_eq!(exchange.exchange[0].role, "user");
    assert_eq!(exchange.exchange[1].role, "batman");
    assert_eq!(exchange.exchange[1].content, "Fear is a tool.");

    let response = send(&app, post_json("/askbatman", r#"{"question": "   "}"#, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ask_batman_degrades_on_provider_failure() {
    let app = create_router(default_state());
    let cookie = pass_gate(&app).await;

    let response = send(
        &app,
        post_json("/askbatman", r#"{"question": "Are you there?"}"#, Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let exchange: ExchangeView = body_json(response).await;
    assert!(exchange.degraded);
    assert_eq!(exchange.exchange[1].content, ASK_BATMAN_FAILURE);
}

#[tokio::test]
async fn test_announcements() {
    let app = create_router(default_state());
    let cookie = pass_gate(&app).await;

    let response = send(&app, get_request("/announcements", Some(&cookie))).await;
    let page: Value = body_json(response).await;
    assert!(page["announcements"].as_array().unwrap().is_empty());
    assert!(page["empty_message"].is_string());

    for title in ["First", "Second"] {
        let body = format!(r#"{{"title": "{}", "content": "Stay vigilant."}}"#, title);
        let response = send(&app, post_json("/announcements", &body, Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&app, get_request("/announcements", Some(&cookie))).await;
    let page: Value = body_json(response).await;
    let items = page["announcements"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Second");
    assert_eq!(items[1]["title"], "First");
    assert!(page["empty_message"].is_null());

    let response = send(
        &app,
        post_json("/announcements", r#"{"title": "", "content": "x"}"#, Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.error, "Title and content are required.");
}

#[tokio::test]
async fn test_trial_detail_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/studies/NCT00000001"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = FeedsConfig::default().with_base_url(&server.uri());
    let app = create_router(create_test_state(MockProvider::failing(), config));
    let cookie = pass_gate(&app).await;

    let response = send(&app, get_request("/health/trials/NCT00000001", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let before = server.received_requests().await.unwrap().len();
    let response = send(&app, get_request("/health/trials/batman", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.received_requests().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_nutrition_requires_query() {
    let app = create_router(default_state());
    let cookie = pass_gate(&app).await;

    let response = send(&app, get_request("/health/nutrition?q=%20", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.error, "Search query is required.");
}

#[tokio::test]
async fn test_liveness() {
    let app = create_router(default_state());

    let response = send(&app, get_request("/healthz", None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let liveness: LivenessResponse = body_json(response).await;
    assert_eq!(liveness.status, "ok");
    assert!(liveness.succeeded.is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_router(default_state());

    let response = send(&app, get_request("/penguin", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let page: Value = body_json(response).await;
    assert_eq!(page["title"], "404");
    assert_eq!(page["path"], "/penguin");
}

async fn explode() -> &'static str {
    panic!("joker was here")
}

#[tokio::test]
async fn test_crash_boundary() {
    let app = with_crash_boundary(Router::new().route("/explode", get(explode)));

    let response = send(&app, get_request("/explode", None)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers().get("refresh").unwrap(), "1; url=/");

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], CRASH_MESSAGE.as_bytes());
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = with_crash_boundary(create_router(default_state()));

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/functions/batman-wisdom")
        .header(header::ORIGIN, "https://gotham.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,apikey")
        .body(Body::empty())
        .unwrap();

    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
