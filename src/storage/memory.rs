//! In-memory store. Volatile: nothing survives a restart.

use super::table::Table;
use super::{
    ArticleRepository, ContactRepository, CourseRepository, EnrollmentRepository,
    InstructorRepository, ReviewRepository, TestimonialRepository, UserRepository,
};
use crate::models::{
    Article, ContactSubmission, Course, CoursePatch, Enrollment, EnrollmentPatch, Instructor,
    NewArticle, NewContactSubmission, NewCourse, NewEnrollment, NewInstructor, NewReview,
    NewTestimonial, NewUser, Review, Testimonial, Timestamp, User,
};
use std::cmp::Reverse;

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn now() -> Timestamp {
    chrono::Utc::now()
}

/// One table per entity
#[derive(Debug, Default)]
pub struct MemStorage {
    users: Table<User>,
    courses: Table<Course>,
    instructors: Table<Instructor>,
    enrollments: Table<Enrollment>,
    reviews: Table<Review>,
    articles: Table<Article>,
    testimonials: Table<Testimonial>,
    contact_submissions: Table<ContactSubmission>,
}

impl MemStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the demo seed data
    pub fn seeded() -> Self {
        let store = Self::new();
        super::seed::seed_demo_data(&store);
        store
    }
}

impl UserRepository for MemStorage {
    fn get_user(&self, id: &str) -> Option<User> {
        self.users.get(id)
    }

    fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.users.find(|user| user.email == email)
    }

    fn get_all_users(&self) -> Vec<User> {
        self.users.all()
    }

    fn create_user(&self, user: NewUser) -> User {
        let user = User {
            id: new_id(),
            name: user.name,
            email: user.email,
            phone: user.phone,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now(),
        };
        tracing::debug!(user_id = %user.id, "created user");
        self.users.insert(user)
    }
}

impl CourseRepository for MemStorage {
    fn get_all_courses(&self) -> Vec<Course> {
        self.courses.all()
    }

    fn get_course(&self, id: &str) -> Option<Course> {
        self.courses.get(id)
    }

    fn get_courses_by_category(&self, category: &str) -> Vec<Course> {
        self.courses.filter(|course| course.category == category)
    }

    fn get_featured_courses(&self) -> Vec<Course> {
        self.courses.filter(|course| course.featured)
    }

    fn create_course(&self, course: NewCourse) -> Course {
        let course = Course {
            id: new_id(),
            title: course.title,
            description: course.description,
            category: course.category,
            price_usd: course.price_usd,
            price_zwl: course.price_zwl,
            duration: course.duration,
            level: course.level,
            thumbnail: course.thumbnail,
            syllabus: course.syllabus,
            learning_outcomes: course.learning_outcomes,
            instructor_id: course.instructor_id,
            featured: course.featured,
            created_at: now(),
        };
        tracing::debug!(course_id = %course.id, title = %course.title, "created course");
        self.courses.insert(course)
    }

    fn update_course(&self, id: &str, patch: CoursePatch) -> Option<Course> {
        self.courses.update(id, |course| patch.apply(course))
    }

    fn delete_course(&self, id: &str) -> bool {
        let removed = self.courses.remove(id);
        if removed {
            tracing::debug!(course_id = %id, "deleted course");
        }
        removed
    }
}

impl InstructorRepository for MemStorage {
    fn get_all_instructors(&self) -> Vec<Instructor> {
        self.instructors.all()
    }

    fn get_instructor(&self, id: &str) -> Option<Instructor> {
        self.instructors.get(id)
    }

    fn create_instructor(&self, instructor: NewInstructor) -> Instructor {
        self.instructors.insert(Instructor {
            id: new_id(),
            name: instructor.name,
            title: instructor.title,
            bio: instructor.bio,
            photo: instructor.photo,
            expertise: instructor.expertise,
        })
    }
}

impl EnrollmentRepository for MemStorage {
    fn get_all_enrollments(&self) -> Vec<Enrollment> {
        self.enrollments.all()
    }

    fn get_enrollments_by_user_id(&self, user_id: &str) -> Vec<Enrollment> {
        self.enrollments.filter(|e| e.user_id == user_id)
    }

    fn create_enrollment(&self, enrollment: NewEnrollment) -> Enrollment {
        let enrollment = Enrollment {
            id: new_id(),
            user_id: enrollment.user_id,
            course_id: enrollment.course_id,
            payment_method: enrollment.payment_method,
            progress: 0,
            completed: false,
            certificate_issued: false,
            enrolled_at: now(),
        };
        tracing::debug!(
            enrollment_id = %enrollment.id,
            user_id = %enrollment.user_id,
            course_id = %enrollment.course_id,
            "created enrollment"
        );
        self.enrollments.insert(enrollment)
    }

    fn update_enrollment(&self, id: &str, patch: EnrollmentPatch) -> Option<Enrollment> {
        self.enrollments.update(id, |e| patch.apply(e))
    }
}

impl ReviewRepository for MemStorage {
    fn get_all_reviews(&self) -> Vec<Review> {
        self.reviews.all()
    }

    fn get_reviews_by_course_id(&self, course_id: &str) -> Vec<Review> {
        self.reviews.filter(|r| r.course_id == course_id)
    }

    fn create_review(&self, review: NewReview) -> Review {
        self.reviews.insert(Review {
            id: new_id(),
            course_id: review.course_id,
            user_id: review.user_id,
            rating: review.rating,
            comment: review.comment,
            created_at: now(),
        })
    }
}

impl ArticleRepository for MemStorage {
    fn get_all_articles(&self) -> Vec<Article> {
        let mut articles = self.articles.all();
        // stable sort keeps insertion order for equal timestamps
        articles.sort_by_key(|a| Reverse(a.published_at));
        articles
    }

    fn get_article(&self, id: &str) -> Option<Article> {
        self.articles.get(id)
    }

    fn get_article_by_slug(&self, slug: &str) -> Option<Article> {
        self.articles.find(|a| a.slug == slug)
    }

    fn create_article(&self, article: NewArticle) -> Article {
        self.articles.insert(Article {
            id: new_id(),
            title: article.title,
            slug: article.slug,
            content: article.content,
            excerpt: article.excerpt,
            category: article.category,
            thumbnail: article.thumbnail,
            author: article.author,
            published_at: now(),
        })
    }
}

impl TestimonialRepository for MemStorage {
    fn get_all_testimonials(&self) -> Vec<Testimonial> {
        self.testimonials.all()
    }

    fn create_testimonial(&self, testimonial: NewTestimonial) -> Testimonial {
        self.testimonials.insert(Testimonial {
            id: new_id(),
            name: testimonial.name,
            photo: testimonial.photo,
            text: testimonial.text,
            rating: testimonial.rating,
            course_completed: testimonial.course_completed,
            achievement: testimonial.achievement,
            created_at: now(),
        })
    }
}

impl ContactRepository for MemStorage {
    fn get_all_contact_submissions(&self) -> Vec<ContactSubmission> {
        self.contact_submissions.all()
    }

    fn create_contact_submission(&self, submission: NewContactSubmission) -> ContactSubmission {
        let submission = ContactSubmission {
            id: new_id(),
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            message: submission.message,
            submitted_at: now(),
        };
        tracing::debug!(submission_id = %submission.id, "stored contact submission");
        self.contact_submissions.insert(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::collections::HashSet;

    fn new_course(title: &str, category: &str, featured: bool) -> NewCourse {
        NewCourse {
            title: title.to_string(),
            description: "desc".to_string(),
            category: category.to_string(),
            price_usd: "49.00".to_string(),
            price_zwl: "16000.00".to_string(),
            duration: "6 weeks".to_string(),
            level: "Beginner".to_string(),
            thumbnail: None,
            syllabus: "Week 1".to_string(),
            learning_outcomes: "Outcome".to_string(),
            instructor_id: "instructor-1".to_string(),
            featured,
        }
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test User".to_string(),
            email: email.to_string(),
            phone: None,
            password_hash: "hash".to_string(),
            role: Role::Student,
        }
    }

    fn new_enrollment(user_id: &str, course_id: &str) -> NewEnrollment {
        NewEnrollment {
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            payment_method: "PayNow".to_string(),
        }
    }

    #[test]
    fn test_created_ids_are_unique() {
        let store = MemStorage::new();
        let mut ids = HashSet::new();
        for i in 0..100 {
            let course = store.create_course(new_course(&format!("Course {}", i), "SEO", false));
            assert!(ids.insert(course.id));
        }
        assert_eq!(store.get_all_courses().len(), 100);
    }

    #[test]
    fn test_get_course_returns_created_record() {
        let store = MemStorage::new();
        let created = store.create_course(new_course("SEO Mastery", "SEO", false));

        assert_eq!(store.get_course(&created.id), Some(created));
        assert!(store.get_course("no-such-id").is_none());
    }

    #[test]
    fn test_update_course_changes_only_patched_fields() {
        let store = MemStorage::new();
        let created = store.create_course(new_course("Old", "SEO", false));

        let patch = CoursePatch {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let updated = store.update_course(&created.id, patch).unwrap();

        assert_eq!(updated.title, "New");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.price_usd, created.price_usd);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(store.get_course(&created.id), Some(updated));
    }

    #[test]
    fn test_update_missing_course() {
        let store = MemStorage::new();
        assert!(store.update_course("missing", CoursePatch::default()).is_none());
    }

    #[test]
    fn test_delete_course() {
        let store = MemStorage::new();
        let created = store.create_course(new_course("Doomed", "AI", false));

        assert!(store.delete_course(&created.id));
        assert!(store.get_course(&created.id).is_none());
        assert!(!store.delete_course(&created.id));
    }

    #[test]
    fn test_course_filters() {
        let store = MemStorage::new();
        store.create_course(new_course("A", "SEO", true));
        store.create_course(new_course("B", "Coding", false));
        store.create_course(new_course("C", "SEO", false));

        let seo: Vec<String> = store
            .get_courses_by_category("SEO")
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(seo, vec!["A", "C"]);

        let featured = store.get_featured_courses();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "A");
    }

    #[test]
    fn test_enrollment_defaults() {
        let store = MemStorage::new();
        let enrollment = store.create_enrollment(new_enrollment("u1", "c1"));

        assert_eq!(enrollment.progress, 0);
        assert!(!enrollment.completed);
        assert!(!enrollment.certificate_issued);
    }

    #[test]
    fn test_enrollments_by_user_in_insertion_order() {
        let store = MemStorage::new();
        let first = store.create_enrollment(new_enrollment("u1", "c1"));
        store.create_enrollment(new_enrollment("u2", "c1"));
        let second = store.create_enrollment(new_enrollment("u1", "c2"));
        store.create_enrollment(new_enrollment("u3", "c3"));
        let third = store.create_enrollment(new_enrollment("u1", "c3"));

        let ids: Vec<String> = store
            .get_enrollments_by_user_id("u1")
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
        assert!(store.get_enrollments_by_user_id("nobody").is_empty());
        assert_eq!(store.get_all_enrollments().len(), 5);
    }

    #[test]
    fn test_update_enrollment_progress() {
        let store = MemStorage::new();
        let enrollment = store.create_enrollment(new_enrollment("u1", "c1"));

        let patch = EnrollmentPatch {
            progress: Some(100),
            completed: Some(true),
            ..Default::default()
        };
        let updated = store.update_enrollment(&enrollment.id, patch).unwrap();

        assert_eq!(updated.progress, 100);
        assert!(updated.completed);
        assert!(!updated.certificate_issued);
        assert_eq!(updated.payment_method, "PayNow");
        assert!(store
            .update_enrollment("missing", EnrollmentPatch::default())
            .is_none());
    }

    #[test]
    fn test_user_lookup_by_email() {
        let store = MemStorage::new();
        let user = store.create_user(new_user("a@example.com"));
        store.create_user(new_user("b@example.com"));

        assert_eq!(store.get_user_by_email("a@example.com"), Some(user.clone()));
        assert_eq!(store.get_user(&user.id), Some(user));
        assert!(store.get_user_by_email("A@example.com").is_none());
        assert_eq!(store.get_all_users().len(), 2);
    }

    #[test]
    fn test_store_does_not_enforce_email_uniqueness() {
        let store = MemStorage::new();
        let first = store.create_user(new_user("dup@example.com"));
        let second = store.create_user(new_user("dup@example.com"));

        assert_ne!(first.id, second.id);
        // lookup yields the earliest registration
        assert_eq!(store.get_user_by_email("dup@example.com").unwrap().id, first.id);
    }

    #[test]
    fn test_reviews_by_course() {
        let store = MemStorage::new();
        for (course, rating) in [("c1", 5), ("c2", 3), ("c1", 4)] {
            store.create_review(NewReview {
                course_id: course.to_string(),
                user_id: "u1".to_string(),
                rating,
                comment: "ok".to_string(),
            });
        }

        let ratings: Vec<u8> = store
            .get_reviews_by_course_id("c1")
            .into_iter()
            .map(|r| r.rating)
            .collect();
        assert_eq!(ratings, vec![5, 4]);
        assert_eq!(store.get_all_reviews().len(), 3);
    }

    #[test]
    fn test_articles_newest_first_and_by_slug() {
        let store = MemStorage::new();
        let mut created = Vec::new();
        for slug in ["first", "second", "third"] {
            created.push(store.create_article(NewArticle {
                title: slug.to_string(),
                slug: slug.to_string(),
                content: "body".to_string(),
                excerpt: "short".to_string(),
                category: "SEO".to_string(),
                thumbnail: None,
                author: "Author".to_string(),
            }));
        }

        let listed = store.get_all_articles();
        assert_eq!(listed.len(), 3);
        for pair in listed.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }

        let second = store.get_article_by_slug("second").unwrap();
        assert_eq!(second.id, created[1].id);
        assert_eq!(store.get_article(&created[2].id), Some(created[2].clone()));
        assert!(store.get_article_by_slug("missing").is_none());
    }

    #[test]
    fn test_testimonials_and_contact() {
        let store = MemStorage::new();
        let testimonial = store.create_testimonial(NewTestimonial {
            name: "Grace".to_string(),
            photo: None,
            text: "Great".to_string(),
            rating: 5,
            course_completed: "SEO Mastery".to_string(),
            achievement: None,
        });
        assert_eq!(store.get_all_testimonials(), vec![testimonial]);

        let submission = store.create_contact_submission(NewContactSubmission {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            phone: Some("+263770000000".to_string()),
            message: "Hello".to_string(),
        });
        assert!(!submission.id.is_empty());
        assert_eq!(store.get_all_contact_submissions(), vec![submission]);
    }

    #[test]
    fn test_instructors() {
        let store = MemStorage::new();
        let instructor = store.create_instructor(NewInstructor {
            name: "Dr. Moyo".to_string(),
            title: "Expert".to_string(),
            bio: "Bio".to_string(),
            photo: None,
            expertise: "SEO".to_string(),
        });

        assert_eq!(store.get_instructor(&instructor.id), Some(instructor.clone()));
        assert_eq!(store.get_all_instructors(), vec![instructor]);
        assert!(store.get_instructor("missing").is_none());
    }
}
