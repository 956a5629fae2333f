//! Session-related types.
//!
//! Types stored in the session for authentication state and one-shot notices.

use serde::{Deserialize, Serialize};

use blood_donation_core::AdminUserId;

use super::AdminUser;

/// Session-stored admin identity.
///
/// Its presence in the session is what makes a visitor "logged in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminUserId,
    /// Admin's login name.
    pub username: String,
}

impl From<&AdminUser> for CurrentAdmin {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Severity of a flash notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    /// CSS class suffix used by the templates.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A one-shot notice shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for the queue of pending flash notices.
    pub const FLASHES: &str = "flashes";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_serializes_level_as_snake_case() {
        let json = serde_json::to_string(&Flash::error("x")).unwrap();
        assert_eq!(json, r#"{"level":"error","message":"x"}"#);
    }

    #[test]
    fn test_current_admin_roundtrips_through_session_json() {
        let admin = CurrentAdmin {
            id: AdminUserId::new(3),
            username: "root".to_string(),
        };
        let value = serde_json::to_value(&admin).unwrap();
        assert_eq!(serde_json::from_value::<CurrentAdmin>(value).unwrap(), admin);
    }
}
