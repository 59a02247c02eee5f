//! HTTP surface: JSON endpoints over the data store.

mod accounts;
mod catalog;
mod content;
mod enrollments;
pub mod server;

pub use accounts::{LoginRequest, LoginResponse, RegisterRequest};
pub use catalog::CourseSummary;
pub use enrollments::EnrollmentView;
pub use server::{router, run, AppState};
