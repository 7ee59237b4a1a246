use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::{
    error::DomainError,
    models::{
        join_form::{AvatarFile, JoinPayload},
        user::AvatarId,
    },
    repositories::{image_repository::ImageRepository, user_repository::UserRepository},
    validation::ValidatedForm,
};

/// Result of a registration request the backend answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    Registered {
        message: Option<String>,
    },
    Rejected {
        message: Option<String>,
        error_message: Option<String>,
    },
}

pub struct RegisterUserUsecase<U: UserRepository, I: ImageRepository> {
    user_repository: U,
    image_repository: I,
}

impl<U: UserRepository, I: ImageRepository> RegisterUserUsecase<U, I> {
    pub fn new(user_repository: U, image_repository: I) -> Self {
        Self {
            user_repository,
            image_repository,
        }
    }

    pub async fn join(&self, form: ValidatedForm) -> Result<JoinOutcome, DomainError> {
        let submission_id = Uuid::new_v4();
        let form = form.into_inner();

        let phone = form.phone.replace('-', "");

        if form.password != form.confirm_password {
            return Err(DomainError::PasswordMismatch);
        }

        // Upload the profile picture first so the join request can reference it
        let avatar_id = match &form.avatar {
            Some(file) => Some(self.upload_avatar(submission_id, file).await?),
            None => None,
        };

        let payload = JoinPayload {
            username: form.username,
            user_id: form.user_id,
            password: form.password,
            confirm_password: form.confirm_password,
            email: non_empty(form.email),
            phone: non_empty(phone),
            location: non_empty(form.location),
            avatar_id,
        };

        info!(
            %submission_id,
            user_id = %payload.user_id,
            with_avatar = payload.avatar_id.is_some(),
            "sending join request"
        );
        let response = self.user_repository.join(&payload).await?;

        if response.ok {
            info!(%submission_id, "registration accepted");
            Ok(JoinOutcome::Registered {
                message: response.message,
            })
        } else {
            warn!(
                %submission_id,
                message = ?response.message,
                error_message = ?response.error_message,
                "registration rejected"
            );
            Ok(JoinOutcome::Rejected {
                message: response.message,
                error_message: response.error_message,
            })
        }
    }

    async fn upload_avatar(
        &self,
        submission_id: Uuid,
        file: &AvatarFile,
    ) -> Result<AvatarId, DomainError> {
        let destination = self.image_repository.upload_url().await?;
        info!(%submission_id, file_name = file.file_name(), "uploading avatar");
        let avatar_id = self.image_repository.upload(&destination, file).await?;
        info!(%submission_id, avatar_id = avatar_id.as_str(), "avatar stored");
        Ok(avatar_id)
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
