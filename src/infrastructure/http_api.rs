use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::{domain::error::RepositoryError, infrastructure::config::ClientConfig};

/// Shared HTTP client bound to the backend's base url
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Result<Self, RepositoryError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(transport_error)?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Resolve a path or absolute url against the base url
    pub fn url(&self, path: &str) -> Result<Url, RepositoryError> {
        self.base_url
            .join(path)
            .map_err(|e| RepositoryError::InvalidUrl(format!("{path}: {e}")))
    }
}

pub fn transport_error(e: reqwest::Error) -> RepositoryError {
    if e.is_timeout() {
        RepositoryError::Timeout
    } else if e.is_decode() {
        RepositoryError::Decode(e.to_string())
    } else {
        RepositoryError::Transport(e.to_string())
    }
}

/// Decode a json body. Error statuses are accepted as long as the body decodes,
/// since the API reports business failures as json with a non-2xx status.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RepositoryError> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(transport_error)?;

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(RepositoryError::Status(status.as_u16())),
        Err(e) => Err(RepositoryError::Decode(e.to_string())),
    }
}
