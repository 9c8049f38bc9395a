//! HTTP request handlers for the Gotham service.
//!
//! Public routes: home, the gate, the wisdom function and the liveness
//! probe. Every other page sits behind the gate.

use crate::pages::{
    self, AnnouncementView, ExchangeView, GatePrompt, NutritionResults, TrialDetailView,
};
use crate::session::{clear_cookie, SessionManager};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, Request, State},
    http::{header, HeaderMap, StatusCode, Uri},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use gotham_domain::{Announcement, AnnouncementDraft, WisdomKind};
use gotham_feeds::{FeedError, Feeds};
use gotham_gate::{GateAction, GateError, GateOutcome, GateStore};
use gotham_oracle::{Oracle, OracleError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tracing::{error, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The access gate flag
    pub gate: Arc<GateStore>,
    /// Session cookie signing
    pub sessions: Arc<SessionManager>,
    /// Wisdom proxy and conversation
    pub oracle: Oracle,
    /// Widget slots and on-demand lookups
    pub feeds: Feeds,
    /// Announcement board, newest first
    pub announcements: Arc<RwLock<Vec<Announcement>>>,
}

impl AppState {
    /// Whether the request's visitor has passed the gate
    pub fn has_passed_gate(&self, headers: &HeaderMap) -> bool {
        self.gate.is_authenticated() && self.sessions.has_valid_session(headers)
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed or incomplete request
    BadRequest(String),
    /// Resource does not exist
    NotFound(String),
    /// Upstream service failed
    Upstream(String),
    /// Gate store failure
    GateError(GateError),
    /// Session token failure
    SessionError(crate::session::SessionError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::GateError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::SessionError(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<GateError> for AppError {
    fn from(e: GateError) -> Self {
        AppError::GateError(e)
    }
}

impl From<crate::session::SessionError> for AppError {
    fn from(e: crate::session::SessionError) -> Self {
        AppError::SessionError(e)
    }
}

impl From<FeedError> for AppError {
    fn from(e: FeedError) -> Self {
        error!("Lookup failed: {}", e);
        AppError::Upstream(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest(e.body_text())
    }
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// Gate submission
#[derive(Debug, Deserialize)]
pub struct AccessRequest {
    /// Submitted passphrase
    #[serde(default)]
    pub access_key: String,
}

/// Middleware: restricted routes answer 401 with the gate prompt
async fn require_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.has_passed_gate(request.headers()) {
        return next.run(request).await;
    }
    (StatusCode::UNAUTHORIZED, Json(pages::gate_prompt(false, None))).into_response()
}

/// GET /access - Gate prompt
async fn access_prompt(State(state): State<AppState>, headers: HeaderMap) -> Json<GatePrompt> {
    Json(pages::gate_prompt(state.has_passed_gate(&headers), None))
}

/// POST /access - Submit the passphrase
async fn submit_access(
    State(state): State<AppState>,
    payload: Result<Json<AccessRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;

    match state.gate.dispatch(GateAction::Submit(request.access_key))? {
        GateOutcome::Granted => {
            let token = state.sessions.generate_token()?;
            let cookie = state.sessions.session_cookie(&token);
            Ok((
                [(header::SET_COOKIE, cookie)],
                Json(pages::gate_prompt(true, None)),
            )
                .into_response())
        }
        GateOutcome::Denied { message } => Ok((
            StatusCode::UNAUTHORIZED,
            Json(pages::gate_prompt(false, Some(message))),
        )
            .into_response()),
        GateOutcome::LoggedOut => Err(AppError::InternalError(
            "Unexpected gate outcome".to_string(),
        )),
    }
}

/// POST /logout - Close the gate for everyone
async fn logout(State(state): State<AppState>) -> Result<Response, AppError> {
    state.gate.dispatch(GateAction::Logout)?;
    Ok((
        [(header::SET_COOKIE, clear_cookie())],
        Json(pages::gate_prompt(false, None)),
    )
        .into_response())
}

// ---------------------------------------------------------------------------
// Wisdom function
// ---------------------------------------------------------------------------

/// Wisdom function request
#[derive(Debug, Deserialize)]
pub struct WisdomRequest {
    /// Wisdom kind tag
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Wisdom function response
#[derive(Debug, Serialize, Deserialize)]
pub struct WisdomResponse {
    /// First completion text, verbatim
    pub response: String,
}

/// POST /functions/batman-wisdom - Proxy one wisdom kind
async fn batman_wisdom(
    State(state): State<AppState>,
    payload: Result<Json<WisdomRequest>, JsonRejection>,
) -> Result<Json<WisdomResponse>, AppError> {
    let Json(request) = payload?;
    let kind = request
        .kind
        .as_deref()
        .and_then(WisdomKind::parse)
        .ok_or_else(|| AppError::BadRequest("Invalid type specified".to_string()))?;

    let response = state.oracle.wisdom(kind).await.map_err(|e| {
        error!("Wisdom request '{}' failed: {}", kind, e);
        AppError::Upstream(e.to_string())
    })?;

    Ok(Json(WisdomResponse { response }))
}

// ---------------------------------------------------------------------------
// Liveness
// ---------------------------------------------------------------------------

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    /// Always "ok"
    pub status: String,
    /// Successful fetches per feed
    pub succeeded: BTreeMap<String, usize>,
    /// Failed fetches per feed
    pub failed: BTreeMap<String, usize>,
}

/// GET /healthz - Liveness with feed metrics
async fn liveness(State(state): State<AppState>) -> Json<LivenessResponse> {
    let metrics = state
        .feeds
        .metrics
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .clone();

    Json(LivenessResponse {
        status: "ok".to_string(),
        succeeded: metrics.succeeded,
        failed: metrics.failed,
    })
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// GET / - Home
async fn home(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    Json(pages::home(!state.has_passed_gate(&headers)))
}

/// GET /justice
async fn justice(State(state): State<AppState>) -> impl IntoResponse {
    Json(pages::justice(&state.feeds))
}

/// Finance query
#[derive(Debug, Deserialize)]
pub struct FinanceQuery {
    /// "rookie" or "wayne"
    pub mode: Option<String>,
}

/// GET /finance?mode=
async fn finance(State(state): State<AppState>, Query(query): Query<FinanceQuery>) -> impl IntoResponse {
    Json(pages::finance(&state.feeds, query.mode.as_deref()))
}

/// GET /health
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(pages::health(&state.feeds))
}

/// GET /health/trials/:nct_id
async fn trial_detail(
    State(state): State<AppState>,
    Path(nct_id): Path<String>,
) -> Result<Json<TrialDetailView>, AppError> {
    match state.feeds.trials_client.detail(&nct_id).await? {
        Some(detail) => Ok(Json(detail.into())),
        None => Err(AppError::NotFound(format!("Trial {} not found", nct_id))),
    }
}

/// Nutrition query
#[derive(Debug, Deserialize)]
pub struct NutritionQuery {
    /// Product search text
    pub q: Option<String>,
}

/// GET /health/nutrition?q=
async fn nutrition(
    State(state): State<AppState>,
    Query(query): Query<NutritionQuery>,
) -> Result<Json<NutritionResults>, AppError> {
    let q = query.q.as_deref().map(str::trim).unwrap_or_default();
    if q.is_empty() {
        return Err(AppError::BadRequest("Search query is required.".to_string()));
    }

    let results = state.feeds.food_client.search(q).await?;
    Ok(Json(NutritionResults {
        query: q.to_string(),
        results: results.into_iter().map(Into::into).collect(),
    }))
}

/// GET /askbatman
async fn ask_batman_page(State(state): State<AppState>) -> impl IntoResponse {
    Json(pages::ask_batman(&state.feeds))
}

/// Ask Batman question
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    /// The visitor's question
    #[serde(default)]
    pub question: String,
}

/// POST /askbatman - Ask a question
async fn ask_batman(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<ExchangeView>, AppError> {
    let Json(request) = payload?;
    let exchange = state
        .oracle
        .converse(&request.question)
        .await
        .map_err(|e| match e {
            OracleError::InvalidQuestion(msg) => AppError::BadRequest(msg),
            other => AppError::InternalError(other.to_string()),
        })?;

    if exchange.degraded {
        warn!("Ask Batman answered with the fallback reply");
    }
    Ok(Json(exchange.into()))
}

/// GET /missions
async fn missions() -> impl IntoResponse {
    Json(pages::missions())
}

/// GET /donate
async fn donate() -> impl IntoResponse {
    Json(pages::donate())
}

/// Tools query
#[derive(Debug, Deserialize)]
pub struct ToolsQuery {
    /// Category filter
    pub category: Option<String>,
}

/// GET /tools?category=
async fn tools(Query(query): Query<ToolsQuery>) -> impl IntoResponse {
    Json(pages::tools(query.category.as_deref()))
}

/// GET /announcements - Newest first
async fn list_announcements(State(state): State<AppState>) -> impl IntoResponse {
    let items = state
        .announcements
        .read()
        .unwrap_or_else(|p| p.into_inner())
        .iter()
        .map(AnnouncementView::from)
        .collect();
    Json(pages::announcements(items))
}

/// New announcement
#[derive(Debug, Deserialize)]
pub struct AnnouncementRequest {
    /// Title
    #[serde(default)]
    pub title: String,
    /// Content
    #[serde(default)]
    pub content: String,
    /// Image URL
    #[serde(default)]
    pub image_url: Option<String>,
    /// Author
    #[serde(default)]
    pub author: Option<String>,
}

/// POST /announcements - Publish an announcement
async fn create_announcement(
    State(state): State<AppState>,
    payload: Result<Json<AnnouncementRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AnnouncementView>), AppError> {
    let Json(request) = payload?;
    let draft = AnnouncementDraft {
        title: request.title,
        content: request.content,
        image_url: request.image_url,
        author: request.author,
    };

    let announcement = draft.publish(now_secs()).map_err(AppError::BadRequest)?;
    let view = AnnouncementView::from(&announcement);
    post_announcement(&state.announcements, announcement);

    Ok((StatusCode::CREATED, Json(view)))
}

/// Announcements kept on the board; older ones drop off
pub const MAX_ANNOUNCEMENTS: usize = 100;

fn post_announcement(board: &RwLock<Vec<Announcement>>, announcement: Announcement) {
    let mut board = board.write().unwrap_or_else(|p| p.into_inner());
    board.insert(0, announcement);
    board.truncate(MAX_ANNOUNCEMENTS);
}

/// Any unknown route
async fn not_found(uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(pages::not_found(uri.path())))
}

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create the axum router with all routes
///
/// Cross-cutting layers (crash boundary, CORS, tracing) are added by
/// [`crate::with_crash_boundary`].
pub fn create_router(state: AppState) -> AxumRouter {
    let restricted = AxumRouter::new()
        .route("/justice", get(justice))
        .route("/finance", get(finance))
        .route("/health", get(health))
        .route("/health/trials/:nct_id", get(trial_detail))
        .route("/health/nutrition", get(nutrition))
        .route("/askbatman", get(ask_batman_page).post(ask_batman))
        .route("/missions", get(missions))
        .route("/donate", get(donate))
        .route("/tools", get(tools))
        .route(
            "/announcements",
            get(list_announcements).post(create_announcement),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_gate));

    AxumRouter::new()
        .route("/", get(home))
        .route("/access", get(access_prompt).post(submit_access))
        .route("/logout", post(logout))
        .route("/functions/batman-wisdom", post(batman_wisdom))
        .route("/healthz", get(liveness))
        .merge(restricted)
        .fallback(not_found)
        .with_state(state)
}
