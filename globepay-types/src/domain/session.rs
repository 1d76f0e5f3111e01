//! Authenticated session data.

use serde::{Deserialize, Serialize};

use super::account::User;

/// Bearer token plus the user it was issued to.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub user: User,
}

// Keeps tokens out of logs.
impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"<redacted>")
            .field("user", &self.user.email)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let session = AuthSession {
            token: "secret-token".into(),
            refresh_token: Some("refresh".into()),
            user: serde_json::from_str(
                r#"{"id":"u1","email":"a@b.co","first_name":"A","last_name":"B"}"#,
            )
            .unwrap(),
        };
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("a@b.co"));
    }
}
