//! Marketing content: blog articles, testimonials, and contact form submissions.

use super::Timestamp;
use serde::{Deserialize, Serialize};

/// A blog article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    /// URL slug, unique across articles
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub thumbnail: Option<String>,
    pub author: String,
    pub published_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub author: String,
}

/// A graduate's testimonial shown on the website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub photo: Option<String>,
    pub text: String,
    pub rating: u8,
    /// Title of the course the author completed
    pub course_completed: String,
    pub achievement: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub text: String,
    pub rating: u8,
    pub course_completed: String,
    #[serde(default)]
    pub achievement: Option<String>,
}

/// A message sent through the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub submitted_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}
