use axum::{
    Json, Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::{Html, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use log::{debug, info};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::api::{
    HealthResponse, PollSnapshot, ResetRequest, ResetResponse, VoteRequest, VoteResponse,
};
use crate::config::Config;
use crate::error::PollError;
use crate::poll::{Poll, RESET_MESSAGE};

/// Name of the cookie that marks a client as having voted
pub const VOTE_COOKIE: &str = "voted";

/// Shared state handed to every handler
///
/// Owns the single poll for the lifetime of the server.
pub struct AppState {
    poll: Mutex<Poll>,
}

impl AppState {
    pub fn new(poll: Poll) -> Self {
        AppState {
            poll: Mutex::new(poll),
        }
    }

    /// Lock the poll, recovering the data if a previous holder panicked
    pub fn poll(&self) -> MutexGuard<'_, Poll> {
        self.poll.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Build the application router
///
/// # Arguments
/// * `state` - Shared state holding the poll
/// * `static_dir` - Directory with the built frontend. When it contains an
///   `index.html`, its files are served and every unknown path falls back to
///   that entry document; otherwise the embedded client is served. Either
///   way the fallback only answers GET and HEAD.
pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/api/health", get(health))
        .route("/api/poll", get(get_poll))
        .route("/api/vote", post(vote))
        .route("/api/reset", post(reset_poll))
        .with_state(state);

    let index = static_dir.join("index.html");
    let app = if index.is_file() {
        info!("Serving frontend from {}", static_dir.display());
        api.fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
    } else {
        info!(
            "No frontend bundle at {}, serving the embedded client",
            static_dir.display()
        );
        api.fallback_service(get(serve_embedded_client))
    };

    app.layer(CorsLayer::permissive())
        .layer(middleware::from_fn(log_requests))
}

/// Start the poll server and block until it stops
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(Poll::seeded(&config.admin_token)));
    let app = router(state, &config.static_dir);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server is running on http://localhost:{}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Whether the request carries `voted=true`
pub fn has_voted(jar: &CookieJar) -> bool {
    jar.get(VOTE_COOKIE)
        .map(|cookie| cookie.value() == "true")
        .unwrap_or(false)
}

/// The cookie set after a successful vote
///
/// Lasts one year, stays readable from page scripts so the client can
/// delete it after a reset.
pub fn vote_cookie() -> Cookie<'static> {
    Cookie::build((VOTE_COOKIE, "true"))
        .path("/")
        .max_age(time::Duration::days(365))
        .http_only(false)
        .same_site(SameSite::Lax)
        .build()
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn get_poll(State(state): State<Arc<AppState>>, jar: CookieJar) -> Json<PollSnapshot> {
    let poll = state.poll();
    Json(poll.snapshot(has_voted(&jar)))
}

async fn vote(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<VoteRequest>,
) -> Result<(CookieJar, Json<VoteResponse>), PollError> {
    let options = state
        .poll()
        .vote(has_voted(&jar), &payload.option_id)?
        .to_vec();

    Ok((
        jar.add(vote_cookie()),
        Json(VoteResponse {
            success: true,
            options,
        }),
    ))
}

async fn reset_poll(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<ResetResponse>, PollError> {
    let mut poll = state.poll();
    let options = poll.reset(&payload.token)?.to_vec();

    Ok(Json(ResetResponse {
        success: true,
        message: RESET_MESSAGE.to_string(),
        options,
    }))
}

async fn serve_embedded_client() -> Html<&'static str> {
    Html(include_str!("./static/index.html"))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if path.starts_with("/api/") {
        info!("{} {} -> {}", method, path, status.as_u16());
    } else {
        debug!("{} {} -> {}", method, path, status.as_u16());
    }

    response
}
