//! Enrollments join a user to a course.

use super::Timestamp;
use serde::{Deserialize, Serialize};

/// A user's enrollment in a course, with payment label and progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    /// Payment method label, e.g. "Ecocash"
    pub payment_method: String,
    /// Percent complete, 0 on creation
    pub progress: u32,
    pub completed: bool,
    pub certificate_issued: bool,
    pub enrolled_at: Timestamp,
}

/// Payload for creating an enrollment. Progress and flags start at their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    pub user_id: String,
    pub course_id: String,
    pub payment_method: String,
}

/// Partial enrollment update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrollmentPatch {
    pub payment_method: Option<String>,
    pub progress: Option<u32>,
    pub completed: Option<bool>,
    pub certificate_issued: Option<bool>,
}

impl EnrollmentPatch {
    pub fn apply(self, enrollment: &mut Enrollment) {
        if let Some(v) = self.payment_method {
            enrollment.payment_method = v;
        }
        if let Some(v) = self.progress {
            enrollment.progress = v;
        }
        if let Some(v) = self.completed {
            enrollment.completed = v;
        }
        if let Some(v) = self.certificate_issued {
            enrollment.certificate_issued = v;
        }
    }
}
