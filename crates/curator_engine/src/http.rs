//! Transport pieces shared by the directory and auth clients.

use std::time::Duration;

use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{ApiError, FailureKind};

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

pub(crate) fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))
}

/// Parses `base` and makes sure it ends with `/` so relative joins keep its path.
pub(crate) fn parse_base(base: &str) -> Result<reqwest::Url, ApiError> {
    let mut url = reqwest::Url::parse(base)
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

pub(crate) fn join(base: &reqwest::Url, path: &str) -> Result<reqwest::Url, ApiError> {
    base.join(path)
        .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
}

/// Checks the status and reads the body, refusing anything above `max_bytes`.
pub(crate) async fn read_body(
    response: reqwest::Response,
    max_bytes: u64,
) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }

    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, Some(content_len)));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, Some(next_len)));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// API bodies come either bare or wrapped in `{"data": ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

pub(crate) fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    match serde_json::from_slice::<Envelope<T>>(bytes) {
        Ok(Envelope::Wrapped { data }) | Ok(Envelope::Bare(data)) => Ok(data),
        Err(err) => Err(ApiError::new(FailureKind::Decode, err.to_string())),
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> ApiError {
    ApiError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}
