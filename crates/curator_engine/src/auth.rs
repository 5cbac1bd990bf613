use curator_core::SessionUser;
use curator_logging::curator_info;
use serde::Deserialize;

use crate::http::{self, HttpSettings};
use crate::ApiError;

/// Client for the external authentication service.
#[async_trait::async_trait]
pub trait AuthClient: Send + Sync {
    async fn session(&self) -> Result<Option<SessionUser>, ApiError>;
    async fn sign_out(&self) -> Result<(), ApiError>;
}

#[derive(Deserialize)]
struct SessionBody {
    user: SessionUser,
}

#[derive(Debug, Clone)]
pub struct ReqwestAuthClient {
    base: reqwest::Url,
    client: reqwest::Client,
    settings: HttpSettings,
}

impl ReqwestAuthClient {
    pub fn new(base_url: &str, settings: HttpSettings) -> Result<Self, ApiError> {
        Ok(Self {
            base: http::parse_base(base_url)?,
            client: http::build_client(&settings)?,
            settings,
        })
    }
}

#[async_trait::async_trait]
impl AuthClient for ReqwestAuthClient {
    async fn session(&self) -> Result<Option<SessionUser>, ApiError> {
        let url = http::join(&self.base, "get-session")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(http::map_reqwest_error)?;
        let bytes = http::read_body(response, self.settings.max_bytes).await?;
        // The service answers `null` when nobody is signed in.
        let body: Option<SessionBody> = http::decode_json(&bytes)?;
        Ok(body.map(|body| body.user))
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        let url = http::join(&self.base, "sign-out")?;
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(http::map_reqwest_error)?;
        http::read_body(response, self.settings.max_bytes).await?;
        curator_info!("Signed out");
        Ok(())
    }
}
