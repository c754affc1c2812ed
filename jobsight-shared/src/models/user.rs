use serde::{Deserialize, Serialize};

/// Represents an authenticated user identity.
///
/// This is the shape returned by `GET /auth/me` and embedded in the
/// login/register responses. It is held client-side in memory only and
/// re-derived from a fresh server check on every page load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: uuid::Uuid,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,
}

/// Request to authenticate with email/password credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,
}

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// The user's email address.
    pub email: String,

    /// The user's password.
    pub password: String,

    /// The user's display name.
    pub name: String,
}

/// Response body for login and register; the session itself travels in a
/// cookie set by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// The authenticated user.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_user_creation() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
        };

        assert!(!user.id.is_nil(), "User ID should not be nil");
        assert_eq!(user.name, "Test User");
        assert_eq!(user.email, "test@example.com");
    }

    #[test]
    fn test_user_equality() {
        let id = Uuid::new_v4();
        let user1 = User {
            id,
            name: "Same User".to_string(),
            email: "same@example.com".to_string(),
        };
        let user2 = User {
            id,
            name: "Same User".to_string(),
            email: "same@example.com".to_string(),
        };

        assert_eq!(user1, user2, "Users with the same fields should be equal");
    }

    #[test]
    fn test_login_request_serialization() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"email\":\"a@b.com\""));
        assert!(json.contains("\"password\":\"hunter2\""));
    }

    #[test]
    fn test_auth_response_deserialization() {
        let json = format!(
            r#"{{"user":{{"id":"{}","name":"Ada","email":"ada@example.com"}}}}"#,
            Uuid::new_v4()
        );
        let response: AuthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.user.name, "Ada");
    }
}
