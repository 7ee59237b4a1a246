use serde::{Deserialize, Serialize};

use crate::domain::models::user::User;

/// Where the client code is currently executing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    /// Non-interactive pre-render pass; no requests may be issued
    PreRender,
    Interactive,
}

/// json for logged in user response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUserResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub logged_in_user: Option<User>,
}

/// Current authentication state of the client
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(User),
    Unauthenticated { fetch_failed: bool },
}

impl SessionState {
    pub fn from_response(response: LoggedInUserResponse) -> Self {
        match (response.ok, response.logged_in_user) {
            (true, Some(user)) => Self::Authenticated(user),
            _ => Self::Unauthenticated {
                fetch_failed: false,
            },
        }
    }

    pub fn fetch_failed() -> Self {
        Self::Unauthenticated { fetch_failed: true }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `None` when no answer is known, either still loading or the fetch failed
    pub fn is_logged_in(&self) -> Option<bool> {
        match self {
            Self::Loading => None,
            Self::Authenticated(_) => Some(true),
            Self::Unauthenticated { fetch_failed } => (!fetch_failed).then_some(false),
        }
    }

    pub fn logged_in_user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
