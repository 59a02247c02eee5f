//! Registration, login, and user lookup.
//!
//! No session is issued: a successful login returns the user id, which the
//! portal passes back on later requests.

use super::server::SharedState;
use crate::auth::{hash_password, verify_password};
use crate::error::{ApiError, ApiResult};
use crate::models::{NewUser, Role, User};
use crate::validation::{self, normalize_optional};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// POST /api/register
///
/// Accounts created here are always students, whatever role the body names.
pub async fn register(
    State(state): State<SharedState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(request) = payload?;
    validation::validate_registration(&request.name, &request.email, &request.password)?;

    let email = normalize_email(&request.email);
    let _guard = state.unique_writes.lock().await;
    if state.store.get_user_by_email(&email).is_some() {
        tracing::info!(%email, "registration rejected: email in use");
        return Err(ApiError::Conflict(
            "an account with this email already exists".to_string(),
        ));
    }

    let user = state.store.create_user(NewUser {
        name: request.name.trim().to_string(),
        email,
        phone: normalize_optional(request.phone),
        password_hash: hash_password(&request.password),
        role: Role::Student,
    });
    tracing::info!(user_id = %user.id, "user registered");

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/login
pub async fn login(
    State(state): State<SharedState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;
    let email = normalize_email(&request.email);

    let user = state
        .store
        .get_user_by_email(&email)
        .filter(|user| verify_password(&request.password, &user.password_hash))
        .ok_or_else(|| {
            tracing::info!(%email, "login failed");
            ApiError::InvalidCredentials
        })?;

    tracing::info!(user_id = %user.id, "login succeeded");
    Ok(Json(LoginResponse {
        user_id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
    }))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    state
        .store
        .get_user(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("user"))
}
