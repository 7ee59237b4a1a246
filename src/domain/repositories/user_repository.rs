use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        join_form::{JoinPayload, JoinResponse},
        session::LoggedInUserResponse,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Read the currently authenticated user
    async fn logged_in_user(&self) -> Result<LoggedInUserResponse, RepositoryError>;

    /// Submit a registration request
    async fn join(&self, payload: &JoinPayload) -> Result<JoinResponse, RepositoryError>;
}
