use tracing::{debug, warn};

use crate::domain::{
    models::session::{RenderContext, SessionState},
    repositories::user_repository::UserRepository,
};

pub struct SessionUsecase<U: UserRepository> {
    user_repository: U,
}

impl<U: UserRepository> SessionUsecase<U> {
    pub fn new(user_repository: U) -> Self {
        Self { user_repository }
    }

    /// Resolve the current session. Nothing is requested during a pre-render pass.
    pub async fn query(&self, context: RenderContext) -> SessionState {
        if context == RenderContext::PreRender {
            debug!("skipping session request outside an interactive context");
            return SessionState::Loading;
        }

        match self.user_repository.logged_in_user().await {
            Ok(response) => SessionState::from_response(response),
            Err(e) => {
                warn!("Failed to fetch logged in user: {}", e);
                SessionState::fetch_failed()
            }
        }
    }
}
