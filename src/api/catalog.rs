//! Course catalog routes: courses, instructors, reviews.

use super::server::SharedState;
use crate::error::{ApiError, ApiResult};
use crate::models::{Course, CoursePatch, Instructor, NewCourse, NewInstructor, NewReview, Review};
use crate::storage::Storage;
use crate::validation::{self, normalize_optional};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Filters for GET /api/courses
#[derive(Debug, Default, Deserialize)]
pub struct CourseQuery {
    /// Exact category; "All" means no filter
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// A course as listed in the catalog, with its instructor and rating
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    #[serde(flatten)]
    pub course: Course,
    pub instructor_name: Option<String>,
    /// Mean review rating, absent when there are no reviews
    pub average_rating: Option<f64>,
    pub review_count: usize,
}

fn summarize(store: &dyn Storage, course: Course) -> CourseSummary {
    let instructor_name = store
        .get_instructor(&course.instructor_id)
        .map(|instructor| instructor.name);
    let reviews = store.get_reviews_by_course_id(&course.id);
    let average_rating = if reviews.is_empty() {
        None
    } else {
        let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(total) / reviews.len() as f64)
    };

    CourseSummary {
        course,
        instructor_name,
        average_rating,
        review_count: reviews.len(),
    }
}

/// GET /api/courses
pub async fn list_courses(
    State(state): State<SharedState>,
    query: Result<Query<CourseQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<CourseSummary>>> {
    let Query(query) = query?;
    let store = state.store.as_ref();

    let courses = match query.category.as_deref() {
        Some(category) if category != "All" => store.get_courses_by_category(category),
        _ => store.get_all_courses(),
    };

    let summaries = courses
        .into_iter()
        .filter(|course| query.featured.map_or(true, |f| course.featured == f))
        .map(|course| summarize(store, course))
        .collect();

    Ok(Json(summaries))
}

/// GET /api/courses/{id}
pub async fn get_course(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Course>> {
    state
        .store
        .get_course(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("course"))
}

/// POST /api/courses
pub async fn create_course(
    State(state): State<SharedState>,
    payload: Result<Json<NewCourse>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(mut course) = payload?;
    validation::validate_new_course(&course)?;
    course.thumbnail = normalize_optional(course.thumbnail);

    let course = state.store.create_course(course);
    tracing::info!(course_id = %course.id, title = %course.title, "course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// PATCH /api/courses/{id}
pub async fn update_course(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<CoursePatch>, JsonRejection>,
) -> ApiResult<Json<Course>> {
    let Json(patch) = payload?;
    validation::validate_course_patch(&patch)?;

    state
        .store
        .update_course(&id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound("course"))
}

/// DELETE /api/courses/{id}
pub async fn delete_course(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if state.store.delete_course(&id) {
        tracing::info!(course_id = %id, "course deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("course"))
    }
}

/// GET /api/instructors
pub async fn list_instructors(State(state): State<SharedState>) -> Json<Vec<Instructor>> {
    Json(state.store.get_all_instructors())
}

/// GET /api/instructors/{id}
pub async fn get_instructor(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Instructor>> {
    state
        .store
        .get_instructor(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("instructor"))
}

/// POST /api/instructors
pub async fn create_instructor(
    State(state): State<SharedState>,
    payload: Result<Json<NewInstructor>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(mut instructor) = payload?;
    validation::validate_new_instructor(&instructor)?;
    instructor.photo = normalize_optional(instructor.photo);

    let instructor = state.store.create_instructor(instructor);
    Ok((StatusCode::CREATED, Json(instructor)))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    pub course_id: Option<String>,
}

/// GET /api/reviews?courseId=
pub async fn list_reviews(
    State(state): State<SharedState>,
    query: Result<Query<ReviewQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Review>>> {
    let Query(query) = query?;
    let reviews = match query.course_id {
        Some(course_id) => state.store.get_reviews_by_course_id(&course_id),
        None => state.store.get_all_reviews(),
    };
    Ok(Json(reviews))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<SharedState>,
    payload: Result<Json<NewReview>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(review) = payload?;
    validation::validate_new_review(&review)?;

    let review = state.store.create_review(review);
    tracing::info!(
        review_id = %review.id,
        course_id = %review.course_id,
        rating = review.rating,
        "review created"
    );
    Ok((StatusCode::CREATED, Json(review)))
}
