use std::fmt;

/// Client-side route the application can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn login() -> Self {
        Self::new("/login")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Service for moving the user to another view
pub trait Navigator: Send + Sync {
    /// Push a new route onto the history
    fn push(&self, route: &Route);
}
