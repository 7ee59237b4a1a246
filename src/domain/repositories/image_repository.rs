use async_trait::async_trait;

use crate::domain::{
    error::RepositoryError,
    models::{
        join_form::{AvatarFile, UploadUrl},
        user::AvatarId,
    },
};

/// Repository for direct image uploads through a one-time destination
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Ask the backend for a one-time upload destination
    async fn upload_url(&self) -> Result<UploadUrl, RepositoryError>;

    /// Upload the file to the destination and return the stored asset's id
    async fn upload(
        &self,
        destination: &UploadUrl,
        file: &AvatarFile,
    ) -> Result<AvatarId, RepositoryError>;
}
