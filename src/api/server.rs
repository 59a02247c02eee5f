//! Academy HTTP server using axum.

use super::{accounts, catalog, content, enrollments};
use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::storage::{seed, MemStorage, Storage};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

/// Shared state for all handlers
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub config: ServerConfig,
    /// Held across a uniqueness check and the insert that follows it
    pub(crate) unique_writes: Mutex<()>,
}

impl AppState {
    pub fn new(store: Arc<dyn Storage>, config: ServerConfig) -> Arc<Self> {
        Arc::new(Self {
            store,
            config,
            unique_writes: Mutex::new(()),
        })
    }
}

pub type SharedState = Arc<AppState>;

/// Build the application router
pub fn router(state: SharedState) -> Router {
    let api = Router::new()
        .route(
            "/courses",
            get(catalog::list_courses).post(catalog::create_course),
        )
        .route(
            "/courses/{id}",
            get(catalog::get_course)
                .patch(catalog::update_course)
                .delete(catalog::delete_course),
        )
        .route(
            "/instructors",
            get(catalog::list_instructors).post(catalog::create_instructor),
        )
        .route("/instructors/{id}", get(catalog::get_instructor))
        .route(
            "/reviews",
            get(catalog::list_reviews).post(catalog::create_review),
        )
        .route(
            "/articles",
            get(content::list_articles).post(content::create_article),
        )
        .route("/articles/{slug}", get(content::get_article))
        .route(
            "/testimonials",
            get(content::list_testimonials).post(content::create_testimonial),
        )
        .route("/contact", post(content::submit_contact))
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/users/{id}", get(accounts::get_user))
        .route("/enrollments", post(enrollments::create_enrollment))
        // GET takes a user id, PATCH an enrollment id
        .route(
            "/enrollments/{id}",
            get(enrollments::list_for_user).patch(enrollments::update_enrollment),
        )
        .fallback(api_not_found);

    let mut app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api);

    if let Some(dir) = &state.config.static_dir {
        if dir.is_dir() {
            let index = ServeFile::new(dir.join("index.html"));
            app = app.fallback_service(ServeDir::new(dir).fallback(index));
        } else {
            tracing::warn!(path = %dir.display(), "no static build found, serving API only");
        }
    }

    let cors = state.config.cors_permissive;
    let app = app.with_state(state).layer(TraceLayer::new_for_http());

    if cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// Seed the store if configured, bind, and serve until Ctrl-C
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let store = MemStorage::new();
    if config.seed {
        let summary = seed::seed_demo_data(&store);
        tracing::info!(
            instructors = summary.instructors,
            courses = summary.courses,
            testimonials = summary.testimonials,
            articles = summary.articles,
            users = summary.users,
            "seeded demo data"
        );
    }

    let state = AppState::new(Arc::new(store), config);
    let addr = state.config.bind_addr();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "academy server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn health_handler(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "courses": state.store.get_all_courses().len(),
        "users": state.store.get_all_users().len(),
    }))
}

async fn api_not_found() -> ApiError {
    ApiError::NotFound("route")
}
