use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::debug;

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            join_form::{AvatarFile, UploadUrl},
            user::AvatarId,
        },
        repositories::image_repository::ImageRepository,
    },
    infrastructure::http_api::{HttpApi, read_json, transport_error},
};

pub const UPLOAD_URL_PATH: &str = "/api/upload/image";

/// json returned by the image storage after an upload
#[derive(Deserialize)]
struct UploadResponse {
    result: UploadResult,
}

#[derive(Deserialize)]
struct UploadResult {
    id: String,
}

#[derive(Clone)]
pub struct HttpImageRepository {
    api: HttpApi,
}

impl HttpImageRepository {
    pub fn new(api: HttpApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ImageRepository for HttpImageRepository {
    async fn upload_url(&self) -> Result<UploadUrl, RepositoryError> {
        let url = self.api.url(UPLOAD_URL_PATH)?;
        let response = self
            .api
            .client()
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    async fn upload(
        &self,
        destination: &UploadUrl,
        file: &AvatarFile,
    ) -> Result<AvatarId, RepositoryError> {
        // the destination is usually absolute but may be issued relative to the API
        let url = self.api.url(&destination.upload_url)?;
        debug!(%url, size = file.bytes().len(), "uploading image");

        let part = Part::bytes(file.bytes().to_vec())
            .file_name(file.file_name().to_string())
            .mime_str(file.content_type().as_ref())
            .map_err(transport_error)?;
        let form = Form::new().part("file", part);

        let response = self
            .api
            .client()
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        let uploaded: UploadResponse = read_json(response).await?;
        Ok(AvatarId::new(uploaded.result.id))
    }
}
