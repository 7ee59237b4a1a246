//! Mock repositories and navigator shared by unit tests.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        join_form::{AvatarFile, JoinPayload, JoinResponse, UploadUrl},
        session::LoggedInUserResponse,
        user::AvatarId,
    },
    repositories::{image_repository::ImageRepository, user_repository::UserRepository},
    services::navigation_service::{Navigator, Route},
};

pub const UPLOAD_DESTINATION: &str = "https://upload.example.com/one-time";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    LoggedInUser,
    Join(JoinPayload),
    UploadUrl,
    Upload { destination: String, file_name: String },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

#[derive(Clone, Default)]
pub struct MockUserRepository {
    log: CallLog,
    session: Option<LoggedInUserResponse>,
    join: Option<JoinResponse>,
    delay: Option<Duration>,
}

impl MockUserRepository {
    pub fn with_session(session: LoggedInUserResponse) -> Self {
        Self {
            session: Some(session),
            ..Self::default()
        }
    }

    pub fn joining(response: JoinResponse) -> Self {
        Self {
            join: Some(response),
            ..Self::default()
        }
    }

    /// Every request fails at the transport level
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn logged_in_user(&self) -> Result<LoggedInUserResponse, RepositoryError> {
        self.log.lock().unwrap().push(Call::LoggedInUser);
        self.session
            .clone()
            .ok_or_else(|| RepositoryError::Transport("connection refused".to_string()))
    }

    async fn join(&self, payload: &JoinPayload) -> Result<JoinResponse, RepositoryError> {
        self.log.lock().unwrap().push(Call::Join(payload.clone()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.join
            .clone()
            .ok_or_else(|| RepositoryError::Transport("connection refused".to_string()))
    }
}

#[derive(Clone, Default)]
pub struct MockImageRepository {
    log: CallLog,
    avatar_id: Option<String>,
    no_destination: bool,
}

impl MockImageRepository {
    pub fn storing(avatar_id: &str) -> Self {
        Self {
            avatar_id: Some(avatar_id.to_string()),
            ..Self::default()
        }
    }

    /// Upload destination is issued but the upload itself fails
    pub fn failing() -> Self {
        Self::default()
    }

    /// The upload destination request itself fails
    pub fn unavailable() -> Self {
        Self {
            no_destination: true,
            ..Self::default()
        }
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }
}

#[async_trait]
impl ImageRepository for MockImageRepository {
    async fn upload_url(&self) -> Result<UploadUrl, RepositoryError> {
        self.log.lock().unwrap().push(Call::UploadUrl);
        if self.no_destination {
            return Err(RepositoryError::Status(503));
        }
        Ok(UploadUrl {
            upload_url: UPLOAD_DESTINATION.to_string(),
        })
    }

    async fn upload(
        &self,
        destination: &UploadUrl,
        file: &AvatarFile,
    ) -> Result<AvatarId, RepositoryError> {
        self.log.lock().unwrap().push(Call::Upload {
            destination: destination.upload_url.clone(),
            file_name: file.file_name().to_string(),
        });
        self.avatar_id
            .as_deref()
            .map(AvatarId::new)
            .ok_or(RepositoryError::Status(500))
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: &Route) {
        self.routes.lock().unwrap().push(route.clone());
    }
}

pub fn avatar() -> AvatarFile {
    AvatarFile::new("me.png", mime::IMAGE_PNG, vec![0x89, b'P', b'N', b'G'])
}
