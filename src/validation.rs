//! Input validation for request payloads.
//!
//! The store accepts anything; these checks run in the HTTP handlers before
//! a payload reaches it.

use crate::models::{
    CoursePatch, EnrollmentPatch, NewArticle, NewContactSubmission, NewCourse, NewEnrollment,
    NewInstructor, NewReview, NewTestimonial,
};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Accepted payment method labels
pub const PAYMENT_METHODS: &[&str] = &["Ecocash", "PayNow", "Bank Transfer", "Installments"];

/// Minimum password length for registration
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("valid price regex"));
static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid slug regex"));

/// A rejected field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

pub fn require_non_empty(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

pub fn validate_email(field: &'static str, value: &str) -> ValidationResult {
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(ValidationError::new(field, "invalid email address"));
    }
    Ok(())
}

pub fn validate_password(value: &str) -> ValidationResult {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    Ok(())
}

pub fn validate_payment_method(value: &str) -> ValidationResult {
    if !PAYMENT_METHODS.contains(&value) {
        return Err(ValidationError::new(
            "paymentMethod",
            format!("must be one of: {}", PAYMENT_METHODS.join(", ")),
        ));
    }
    Ok(())
}

pub fn validate_rating(value: u8) -> ValidationResult {
    if !(1..=5).contains(&value) {
        return Err(ValidationError::new("rating", "must be between 1 and 5"));
    }
    Ok(())
}

pub fn validate_progress(value: u32) -> ValidationResult {
    if value > 100 {
        return Err(ValidationError::new("progress", "must be between 0 and 100"));
    }
    Ok(())
}

/// Non-negative decimal with at most two fraction digits
pub fn validate_price(field: &'static str, value: &str) -> ValidationResult {
    if !PRICE_RE.is_match(value) {
        return Err(ValidationError::new(
            field,
            "must be a decimal amount like 49.00",
        ));
    }
    Ok(())
}

pub fn validate_slug(value: &str) -> ValidationResult {
    if !SLUG_RE.is_match(value) {
        return Err(ValidationError::new(
            "slug",
            "must contain only lowercase letters, digits and single dashes",
        ));
    }
    Ok(())
}

/// Trim an optional form field and treat blank as absent
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn validate_registration(name: &str, email: &str, password: &str) -> ValidationResult {
    require_non_empty("name", name)?;
    validate_email("email", email)?;
    validate_password(password)
}

pub fn validate_new_course(course: &NewCourse) -> ValidationResult {
    require_non_empty("title", &course.title)?;
    require_non_empty("description", &course.description)?;
    require_non_empty("category", &course.category)?;
    validate_price("priceUSD", &course.price_usd)?;
    validate_price("priceZWL", &course.price_zwl)?;
    require_non_empty("duration", &course.duration)?;
    require_non_empty("level", &course.level)?;
    require_non_empty("instructorId", &course.instructor_id)
}

pub fn validate_course_patch(patch: &CoursePatch) -> ValidationResult {
    let required = [
        ("title", &patch.title),
        ("description", &patch.description),
        ("category", &patch.category),
        ("duration", &patch.duration),
        ("level", &patch.level),
        ("instructorId", &patch.instructor_id),
    ];
    for (field, value) in required {
        if let Some(value) = value {
            require_non_empty(field, value)?;
        }
    }
    if let Some(price) = &patch.price_usd {
        validate_price("priceUSD", price)?;
    }
    if let Some(price) = &patch.price_zwl {
        validate_price("priceZWL", price)?;
    }
    Ok(())
}

pub fn validate_new_instructor(instructor: &NewInstructor) -> ValidationResult {
    require_non_empty("name", &instructor.name)?;
    require_non_empty("title", &instructor.title)?;
    require_non_empty("bio", &instructor.bio)?;
    require_non_empty("expertise", &instructor.expertise)
}

pub fn validate_new_enrollment(enrollment: &NewEnrollment) -> ValidationResult {
    require_non_empty("userId", &enrollment.user_id)?;
    require_non_empty("courseId", &enrollment.course_id)?;
    validate_payment_method(&enrollment.payment_method)
}

pub fn validate_enrollment_patch(patch: &EnrollmentPatch) -> ValidationResult {
    if let Some(method) = &patch.payment_method {
        validate_payment_method(method)?;
    }
    if let Some(progress) = patch.progress {
        validate_progress(progress)?;
    }
    Ok(())
}

pub fn validate_new_review(review: &NewReview) -> ValidationResult {
    require_non_empty("courseId", &review.course_id)?;
    require_non_empty("userId", &review.user_id)?;
    validate_rating(review.rating)?;
    require_non_empty("comment", &review.comment)
}

pub fn validate_new_article(article: &NewArticle) -> ValidationResult {
    require_non_empty("title", &article.title)?;
    validate_slug(&article.slug)?;
    require_non_empty("content", &article.content)?;
    require_non_empty("excerpt", &article.excerpt)?;
    require_non_empty("category", &article.category)?;
    require_non_empty("author", &article.author)
}

pub fn validate_new_testimonial(testimonial: &NewTestimonial) -> ValidationResult {
    require_non_empty("name", &testimonial.name)?;
    require_non_empty("text", &testimonial.text)?;
    validate_rating(testimonial.rating)
}

pub fn validate_new_contact(submission: &NewContactSubmission) -> ValidationResult {
    require_non_empty("name", &submission.name)?;
    validate_email("email", &submission.email)?;
    require_non_empty("message", &submission.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("email", "demo@example.com").is_ok());
        assert!(validate_email("email", " demo@example.com ").is_ok());
        assert!(validate_email("email", "demo@example").is_err());
        assert!(validate_email("email", "not an email").is_err());
        assert!(validate_email("email", "").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }

    #[test]
    fn test_payment_methods() {
        for method in PAYMENT_METHODS {
            assert!(validate_payment_method(method).is_ok());
        }
        let err = validate_payment_method("Credit Card").unwrap_err();
        assert_eq!(err.field, "paymentMethod");
    }

    #[test]
    fn test_price() {
        assert!(validate_price("priceUSD", "49.00").is_ok());
        assert!(validate_price("priceUSD", "129").is_ok());
        assert!(validate_price("priceUSD", "16000.5").is_ok());
        assert!(validate_price("priceUSD", "-1.00").is_err());
        assert!(validate_price("priceUSD", "1.999").is_err());
        assert!(validate_price("priceUSD", "abc").is_err());
    }

    #[test]
    fn test_slug() {
        assert!(validate_slug("seo-strategies-zimbabwean-businesses").is_ok());
        assert!(validate_slug("top-10-trends-2026").is_ok());
        assert!(validate_slug("Has Caps").is_err());
        assert!(validate_slug("double--dash").is_err());
        assert!(validate_slug("-leading").is_err());
    }

    #[test]
    fn test_rating_and_progress_bounds() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
        assert!(validate_progress(100).is_ok());
        assert!(validate_progress(101).is_err());
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(normalize_optional(None), None);
        assert_eq!(
            normalize_optional(Some(" +263 ".to_string())),
            Some("+263".to_string())
        );
    }

    #[test]
    fn test_course_patch_rejects_blank_required_fields() {
        let patch = CoursePatch {
            description: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_course_patch(&patch).unwrap_err().field, "description");

        let blanks = [
            (
                "category",
                CoursePatch {
                    category: Some(String::new()),
                    ..Default::default()
                },
            ),
            (
                "duration",
                CoursePatch {
                    duration: Some(String::new()),
                    ..Default::default()
                },
            ),
            (
                "level",
                CoursePatch {
                    level: Some(String::new()),
                    ..Default::default()
                },
            ),
        ];
        for (field, patch) in blanks {
            assert_eq!(validate_course_patch(&patch).unwrap_err().field, field);
        }

        let ok = CoursePatch {
            level: Some("Advanced".to_string()),
            thumbnail: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_course_patch(&ok).is_ok());
    }

    #[test]
    fn test_instructor_and_article_fields() {
        let instructor = NewInstructor {
            name: "Ann".to_string(),
            title: "Coach".to_string(),
            bio: String::new(),
            photo: None,
            expertise: "SEO".to_string(),
        };
        assert_eq!(validate_new_instructor(&instructor).unwrap_err().field, "bio");

        let article = NewArticle {
            title: "Post".to_string(),
            slug: "post".to_string(),
            content: "Body".to_string(),
            excerpt: "Short".to_string(),
            category: "  ".to_string(),
            thumbnail: None,
            author: "Staff".to_string(),
        };
        assert_eq!(validate_new_article(&article).unwrap_err().field, "category");

        let article = NewArticle {
            excerpt: String::new(),
            category: "SEO".to_string(),
            ..article
        };
        assert_eq!(validate_new_article(&article).unwrap_err().field, "excerpt");
    }

    #[test]
    fn test_registration_reports_first_bad_field() {
        let err = validate_registration("", "bad", "x").unwrap_err();
        assert_eq!(err.field, "name");
        let err = validate_registration("Ann", "bad", "x").unwrap_err();
        assert_eq!(err.field, "email");
        let err = validate_registration("Ann", "ann@example.com", "x").unwrap_err();
        assert_eq!(err.field, "password");
        assert!(validate_registration("Ann", "ann@example.com", "secret1").is_ok());
    }
}
