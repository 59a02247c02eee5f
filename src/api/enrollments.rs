//! Enrollment routes backing the enroll form and the student portal.

use super::server::SharedState;
use crate::error::{ApiError, ApiResult};
use crate::models::{Enrollment, EnrollmentPatch, NewEnrollment};
use crate::validation;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

/// An enrollment with the title of its course, as the portal shows it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentView {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    /// Absent when the referenced course no longer exists
    pub course_title: Option<String>,
}

/// POST /api/enrollments
///
/// User and course ids are stored as given; they are not checked for existence.
pub async fn create_enrollment(
    State(state): State<SharedState>,
    payload: Result<Json<NewEnrollment>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(enrollment) = payload?;
    validation::validate_new_enrollment(&enrollment)?;

    let enrollment = state.store.create_enrollment(enrollment);
    tracing::info!(
        enrollment_id = %enrollment.id,
        user_id = %enrollment.user_id,
        course_id = %enrollment.course_id,
        payment_method = %enrollment.payment_method,
        "enrollment created"
    );
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// GET /api/enrollments/{user_id}
pub async fn list_for_user(
    State(state): State<SharedState>,
    Path(user_id): Path<String>,
) -> Json<Vec<EnrollmentView>> {
    let views = state
        .store
        .get_enrollments_by_user_id(&user_id)
        .into_iter()
        .map(|enrollment| {
            let course_title = state
                .store
                .get_course(&enrollment.course_id)
                .map(|course| course.title);
            EnrollmentView {
                enrollment,
                course_title,
            }
        })
        .collect();
    Json(views)
}

/// PATCH /api/enrollments/{id}
pub async fn update_enrollment(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<EnrollmentPatch>, JsonRejection>,
) -> ApiResult<Json<Enrollment>> {
    let Json(patch) = payload?;
    validation::validate_enrollment_patch(&patch)?;

    let enrollment = state
        .store
        .update_enrollment(&id, patch)
        .ok_or(ApiError::NotFound("enrollment"))?;
    tracing::info!(
        enrollment_id = %enrollment.id,
        progress = enrollment.progress,
        completed = enrollment.completed,
        "enrollment updated"
    );
    Ok(Json(enrollment))
}
