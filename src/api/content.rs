//! Website content routes: blog, testimonials, contact form.

use super::server::SharedState;
use crate::error::{ApiError, ApiResult};
use crate::models::{Article, NewArticle, NewContactSubmission, NewTestimonial, Testimonial};
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
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ArticleQuery {
    /// Exact category; "All" means no filter
    pub category: Option<String>,
}

/// GET /api/articles - newest first
pub async fn list_articles(
    State(state): State<SharedState>,
    query: Result<Query<ArticleQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Article>>> {
    let Query(query) = query?;
    let mut articles = state.store.get_all_articles();
    if let Some(category) = query.category.filter(|c| c != "All") {
        articles.retain(|a| a.category == category);
    }
    Ok(Json(articles))
}

/// GET /api/articles/{slug}
pub async fn get_article(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Article>> {
    state
        .store
        .get_article_by_slug(&slug)
        .map(Json)
        .ok_or(ApiError::NotFound("article"))
}

/// POST /api/articles
pub async fn create_article(
    State(state): State<SharedState>,
    payload: Result<Json<NewArticle>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(mut article) = payload?;
    validation::validate_new_article(&article)?;

    let _guard = state.unique_writes.lock().await;
    if state.store.get_article_by_slug(&article.slug).is_some() {
        return Err(ApiError::Conflict(format!(
            "an article with slug '{}' already exists",
            article.slug
        )));
    }
    article.thumbnail = normalize_optional(article.thumbnail);

    let article = state.store.create_article(article);
    tracing::info!(article_id = %article.id, slug = %article.slug, "article published");
    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/testimonials
pub async fn list_testimonials(State(state): State<SharedState>) -> Json<Vec<Testimonial>> {
    Json(state.store.get_all_testimonials())
}

/// POST /api/testimonials
pub async fn create_testimonial(
    State(state): State<SharedState>,
    payload: Result<Json<NewTestimonial>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(mut testimonial) = payload?;
    validation::validate_new_testimonial(&testimonial)?;
    testimonial.photo = normalize_optional(testimonial.photo);
    testimonial.achievement = normalize_optional(testimonial.achievement);

    let testimonial = state.store.create_testimonial(testimonial);
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<SharedState>,
    payload: Result<Json<NewContactSubmission>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(mut submission) = payload?;
    validation::validate_new_contact(&submission)?;
    submission.email = submission.email.trim().to_string();
    submission.phone = normalize_optional(submission.phone);

    let submission = state.store.create_contact_submission(submission);
    tracing::info!(submission_id = %submission.id, "contact form submitted");
    Ok((StatusCode::CREATED, Json(submission)))
}
