//! Catalog entities: courses, their instructors, and reviews.

use super::Timestamp;
use serde::{Deserialize, Serialize};

/// A course offered in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Decimal string with two fraction digits, e.g. "49.00"
    #[serde(rename = "priceUSD")]
    pub price_usd: String,
    #[serde(rename = "priceZWL")]
    pub price_zwl: String,
    pub duration: String,
    pub level: String,
    pub thumbnail: Option<String>,
    /// One syllabus entry per line
    pub syllabus: String,
    /// One outcome per line
    pub learning_outcomes: String,
    pub instructor_id: String,
    pub featured: bool,
    pub created_at: Timestamp,
}

/// Payload for creating a course
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "priceUSD")]
    pub price_usd: String,
    #[serde(rename = "priceZWL")]
    pub price_zwl: String,
    pub duration: String,
    pub level: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub syllabus: String,
    pub learning_outcomes: String,
    pub instructor_id: String,
    #[serde(default)]
    pub featured: bool,
}

/// Partial course update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "priceUSD")]
    pub price_usd: Option<String>,
    #[serde(rename = "priceZWL")]
    pub price_zwl: Option<String>,
    pub duration: Option<String>,
    pub level: Option<String>,
    /// `""` removes the current thumbnail
    pub thumbnail: Option<String>,
    pub syllabus: Option<String>,
    pub learning_outcomes: Option<String>,
    pub instructor_id: Option<String>,
    pub featured: Option<bool>,
}

impl CoursePatch {
    /// Merge the provided fields into `course`
    pub fn apply(self, course: &mut Course) {
        if let Some(v) = self.title {
            course.title = v;
        }
        if let Some(v) = self.description {
            course.description = v;
        }
        if let Some(v) = self.category {
            course.category = v;
        }
        if let Some(v) = self.price_usd {
            course.price_usd = v;
        }
        if let Some(v) = self.price_zwl {
            course.price_zwl = v;
        }
        if let Some(v) = self.duration {
            course.duration = v;
        }
        if let Some(v) = self.level {
            course.level = v;
        }
        // a blank thumbnail clears it
        if let Some(v) = self.thumbnail {
            let v = v.trim();
            course.thumbnail = (!v.is_empty()).then(|| v.to_string());
        }
        if let Some(v) = self.syllabus {
            course.syllabus = v;
        }
        if let Some(v) = self.learning_outcomes {
            course.learning_outcomes = v;
        }
        if let Some(v) = self.instructor_id {
            course.instructor_id = v;
        }
        if let Some(v) = self.featured {
            course.featured = v;
        }
    }
}

/// Instructor profile, referenced by `Course::instructor_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub photo: Option<String>,
    /// Comma separated areas of expertise
    pub expertise: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstructor {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub photo: Option<String>,
    pub expertise: String,
}

/// A student's rating of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub course_id: String,
    pub user_id: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub comment: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub course_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
}
