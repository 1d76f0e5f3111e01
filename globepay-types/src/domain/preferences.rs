//! Notification and account preferences.

use serde::{Deserialize, Serialize};

/// Preferences as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub transaction_alerts: bool,
    pub security_alerts: bool,
    pub marketing_emails: bool,
    pub two_factor_enabled: bool,
}

impl Default for UserPreferences {
    /// What the settings screen shows when the backend cannot be reached.
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            sms_notifications: false,
            transaction_alerts: true,
            security_alerts: true,
            marketing_emails: false,
            two_factor_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannels {
    pub email: bool,
    pub sms: bool,
}

/// Partial preference update. Only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationChannels>,
}

impl PreferencesUpdate {
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn notifications(mut self, email: bool, sms: bool) -> Self {
        self.notifications = Some(NotificationChannels { email, sms });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.language.is_none() && self.timezone.is_none() && self.notifications.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_omits_absent_fields() {
        let update = PreferencesUpdate::default().timezone("Africa/Lagos");
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "timezone": "Africa/Lagos" }));
    }

    #[test]
    fn test_full_update_serializes_nested_notifications() {
        let update = PreferencesUpdate::default()
            .language("en")
            .notifications(true, false);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "language": "en",
                "notifications": { "email": true, "sms": false }
            })
        );
    }

    #[test]
    fn test_empty_update() {
        assert!(PreferencesUpdate::default().is_empty());
        assert!(!PreferencesUpdate::default().language("fr").is_empty());
    }

    #[test]
    fn test_preferences_ignore_extra_backend_fields() {
        let json = r#"{
            "id": "p1",
            "user_id": "u1",
            "email_notifications": false,
            "push_notifications": true,
            "sms_notifications": false,
            "transaction_alerts": true,
            "security_alerts": true,
            "marketing_emails": false,
            "two_factor_enabled": true,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let prefs: UserPreferences = serde_json::from_str(json).unwrap();
        assert!(prefs.push_notifications);
        assert!(prefs.two_factor_enabled);
    }
}
