//! User accounts.

use super::Timestamp;
use serde::{Deserialize, Serialize};

/// Account roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Enrolls in courses and uses the portal
    #[default]
    Student,
    /// Teaches courses
    Instructor,
    /// Manages catalog content
    Admin,
}

/// A registered user.
///
/// The password hash never leaves the server: it is skipped during
/// serialization, so a `User` can be returned from handlers as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: Timestamp,
}

/// Fields needed to create a user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: "u1".to_string(),
            name: "Demo".to_string(),
            email: "demo@example.com".to_string(),
            phone: None,
            password_hash: "sha256$secret".to_string(),
            role: Role::Student,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "student");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_role_default() {
        assert_eq!(Role::default(), Role::Student);
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
