use std::path::Path;

use mime::Mime;
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, models::user::AvatarId};

/// Image selected locally for the profile picture
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarFile {
    file_name: String,
    content_type: Mime,
    bytes: Vec<u8>,
}

impl AvatarFile {
    pub fn new(file_name: impl Into<String>, content_type: Mime, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Read a file from disk, guessing its content type from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("avatar")
            .to_string();
        let content_type = guess_content_type(path);
        Ok(Self::new(file_name, content_type, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_image(&self) -> bool {
        self.content_type.type_() == mime::IMAGE
    }
}

fn guess_content_type(path: &Path) -> Mime {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("gif") => mime::IMAGE_GIF,
        Some("bmp") => mime::IMAGE_BMP,
        Some("svg") => mime::IMAGE_SVG,
        Some("webp") => "image/webp".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

/// Raw values entered on the registration page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinForm {
    pub username: String,
    pub user_id: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub avatar: Option<AvatarFile>,
}

/// json for join request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinPayload {
    pub username: String,
    pub user_id: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<AvatarId>,
}

/// json for join response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// One-time destination issued for a direct image upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadUrl {
    #[serde(rename = "uploadURL")]
    pub upload_url: String,
}
