use curator_core::{Category, QueryParams, Resource, Tag};
use curator_logging::curator_debug;
use serde::de::DeserializeOwned;

use crate::http::{self, HttpSettings};
use crate::{ApiError, FailureKind};

/// Read side of the directory HTTP API.
#[async_trait::async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn resources(&self, params: &QueryParams) -> Result<Vec<Resource>, ApiError>;
    async fn resource(&self, id: &str) -> Result<Resource, ApiError>;
    async fn tags(&self) -> Result<Vec<Tag>, ApiError>;
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    base: reqwest::Url,
    client: reqwest::Client,
    settings: HttpSettings,
}

impl ReqwestApi {
    /// `base_url` is the API root, e.g. `https://host/api`.
    pub fn new(base_url: &str, settings: HttpSettings) -> Result<Self, ApiError> {
        Ok(Self {
            base: http::parse_base(base_url)?,
            client: http::build_client(&settings)?,
            settings,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: reqwest::Url) -> Result<T, ApiError> {
        curator_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(http::map_reqwest_error)?;
        let bytes = http::read_body(response, self.settings.max_bytes).await?;
        http::decode_json(&bytes)
    }
}

#[async_trait::async_trait]
impl DirectoryApi for ReqwestApi {
    async fn resources(&self, params: &QueryParams) -> Result<Vec<Resource>, ApiError> {
        let mut url = http::join(&self.base, "resources")?;
        if !params.is_empty() {
            url.set_query(Some(&params.to_query_string()));
        }
        self.get_json(url).await
    }

    async fn resource(&self, id: &str) -> Result<Resource, ApiError> {
        let mut url = http::join(&self.base, "resources")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::new(FailureKind::InvalidUrl, "base url cannot be a base"))?
            .push(id);
        self.get_json(url).await
    }

    async fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_json(http::join(&self.base, "tags")?).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(http::join(&self.base, "categories")?).await
    }
}
