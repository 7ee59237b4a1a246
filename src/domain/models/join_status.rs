use thiserror::Error;

use crate::domain::services::navigation_service::Route;

/// Lifecycle of a registration page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JoinStatus {
    #[default]
    Editing,
    Submitting,
    Redirecting(Route),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("The page is redirecting to {0}")]
    Redirecting(Route),

    #[error("No submission is in flight")]
    NotSubmitting,
}

impl JoinStatus {
    /// Editing -> Submitting
    pub fn begin_submit(&mut self) -> Result<(), TransitionError> {
        match self {
            Self::Editing => {
                *self = Self::Submitting;
                Ok(())
            }
            Self::Submitting => Err(TransitionError::AlreadySubmitting),
            Self::Redirecting(route) => Err(TransitionError::Redirecting(route.clone())),
        }
    }

    /// Submitting -> Editing
    pub fn reopen(&mut self) -> Result<(), TransitionError> {
        match self {
            Self::Submitting => {
                *self = Self::Editing;
                Ok(())
            }
            _ => Err(TransitionError::NotSubmitting),
        }
    }

    /// Submitting -> Redirecting
    pub fn redirect(&mut self, route: Route) -> Result<(), TransitionError> {
        match self {
            Self::Submitting => {
                *self = Self::Redirecting(route);
                Ok(())
            }
            _ => Err(TransitionError::NotSubmitting),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}
