//! Data store: per-entity repository traits and the in-memory implementation.
//!
//! Every operation is synchronous and infallible. Lookups that miss return
//! `None`, deletes report whether anything was removed. Foreign keys between
//! entities are not checked here, and neither is email or slug uniqueness;
//! callers that care check first.

mod memory;
pub mod seed;
mod table;

pub use memory::MemStorage;
pub use table::{Record, Table};

use crate::models::{
    Article, ContactSubmission, Course, CoursePatch, Enrollment, EnrollmentPatch, Instructor,
    NewArticle, NewContactSubmission, NewCourse, NewEnrollment, NewInstructor, NewReview,
    NewTestimonial, NewUser, Review, Testimonial, User,
};

pub trait UserRepository {
    fn get_user(&self, id: &str) -> Option<User>;
    /// Exact match on the stored email
    fn get_user_by_email(&self, email: &str) -> Option<User>;
    fn get_all_users(&self) -> Vec<User>;
    fn create_user(&self, user: NewUser) -> User;
}

pub trait CourseRepository {
    fn get_all_courses(&self) -> Vec<Course>;
    fn get_course(&self, id: &str) -> Option<Course>;
    fn get_courses_by_category(&self, category: &str) -> Vec<Course>;
    fn get_featured_courses(&self) -> Vec<Course>;
    fn create_course(&self, course: NewCourse) -> Course;
    fn update_course(&self, id: &str, patch: CoursePatch) -> Option<Course>;
    fn delete_course(&self, id: &str) -> bool;
}

pub trait InstructorRepository {
    fn get_all_instructors(&self) -> Vec<Instructor>;
    fn get_instructor(&self, id: &str) -> Option<Instructor>;
    fn create_instructor(&self, instructor: NewInstructor) -> Instructor;
}

pub trait EnrollmentRepository {
    fn get_all_enrollments(&self) -> Vec<Enrollment>;
    fn get_enrollments_by_user_id(&self, user_id: &str) -> Vec<Enrollment>;
    fn create_enrollment(&self, enrollment: NewEnrollment) -> Enrollment;
    fn update_enrollment(&self, id: &str, patch: EnrollmentPatch) -> Option<Enrollment>;
}

pub trait ReviewRepository {
    fn get_all_reviews(&self) -> Vec<Review>;
    fn get_reviews_by_course_id(&self, course_id: &str) -> Vec<Review>;
    fn create_review(&self, review: NewReview) -> Review;
}

pub trait ArticleRepository {
    /// Newest first; articles published at the same instant keep insertion order
    fn get_all_articles(&self) -> Vec<Article>;
    fn get_article(&self, id: &str) -> Option<Article>;
    fn get_article_by_slug(&self, slug: &str) -> Option<Article>;
    fn create_article(&self, article: NewArticle) -> Article;
}

pub trait TestimonialRepository {
    fn get_all_testimonials(&self) -> Vec<Testimonial>;
    fn create_testimonial(&self, testimonial: NewTestimonial) -> Testimonial;
}

pub trait ContactRepository {
    fn get_all_contact_submissions(&self) -> Vec<ContactSubmission>;
    fn create_contact_submission(&self, submission: NewContactSubmission) -> ContactSubmission;
}

/// The full set of repositories the HTTP layer needs
pub trait Storage:
    UserRepository
    + CourseRepository
    + InstructorRepository
    + EnrollmentRepository
    + ReviewRepository
    + ArticleRepository
    + TestimonialRepository
    + ContactRepository
    + Send
    + Sync
{
}

impl<T> Storage for T where
    T: UserRepository
        + CourseRepository
        + InstructorRepository
        + EnrollmentRepository
        + ReviewRepository
        + ArticleRepository
        + TestimonialRepository
        + ContactRepository
        + Send
        + Sync
{
}
