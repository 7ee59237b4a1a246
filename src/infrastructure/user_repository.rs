use async_trait::async_trait;
use tracing::debug;

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            join_form::{JoinPayload, JoinResponse},
            session::LoggedInUserResponse,
        },
        repositories::user_repository::UserRepository,
    },
    infrastructure::http_api::{HttpApi, read_json, transport_error},
};

pub const LOGGED_IN_USER_PATH: &str = "/api/users/loggedInUser";
pub const JOIN_PATH: &str = "/api/users/join";

#[derive(Clone)]
pub struct HttpUserRepository {
    api: HttpApi,
}

impl HttpUserRepository {
    pub fn new(api: HttpApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn logged_in_user(&self) -> Result<LoggedInUserResponse, RepositoryError> {
        let url = self.api.url(LOGGED_IN_USER_PATH)?;
        debug!(%url, "fetching logged in user");
        let response = self
            .api
            .client()
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn join(&self, payload: &JoinPayload) -> Result<JoinResponse, RepositoryError> {
        let url = self.api.url(JOIN_PATH)?;
        let response = self
            .api
            .client()
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let reply: JoinResponse = read_json(response).await?;

        // only a failure that explains itself counts as a business rejection
        if !status.is_success() && reply.message.is_none() && reply.error_message.is_none() {
            return Err(RepositoryError::Status(status.as_u16()));
        }
        Ok(reply)
    }
}
