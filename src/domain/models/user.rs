use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of an image stored by the upload service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvatarId(String);
impl AvatarId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Login handle chosen at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);
impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// User record as returned by the session endpoint.
///
/// The stored password is never read on this side; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    id: Option<i64>,
    username: String,
    user_id: UserId,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    avatar: Option<AvatarId>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id: None,
            username: username.into(),
            user_id,
            email: None,
            phone: None,
            location: None,
            avatar: None,
            created_at: None,
            updated_at: None,
        }
    }

    // getterのみ提供
    pub fn id(&self) -> Option<i64> {
        self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
    pub fn avatar(&self) -> Option<&AvatarId> {
        self.avatar.as_ref()
    }
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
