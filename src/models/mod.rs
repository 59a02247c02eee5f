//! Entity records exchanged between the store and the HTTP surface.
//!
//! Each entity comes in up to three shapes: the stored record, a `New*`
//! payload used to create it (the store fills in the identifier and
//! timestamp), and a `*Patch` payload for partial updates. JSON field names
//! are camelCase to match what the website client sends and reads.

pub mod content;
pub mod course;
pub mod enrollment;
pub mod user;

pub use content::{
    Article, ContactSubmission, NewArticle, NewContactSubmission, NewTestimonial, Testimonial,
};
pub use course::{Course, CoursePatch, Instructor, NewCourse, NewInstructor, NewReview, Review};
pub use enrollment::{Enrollment, EnrollmentPatch, NewEnrollment};
pub use user::{NewUser, Role, User};

/// Timestamp type used for every created/enrolled/published field
pub type Timestamp = chrono::DateTime<chrono::Utc>;
