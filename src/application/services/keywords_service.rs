/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::KeywordsService;
use crate::constants::KEYWORDS_API_PATH;
use crate::error::{AppError, BuiltWithResult};
use crate::model::format::{ApiResponse, KeywordsFormat};
use crate::model::http::HttpClient;
use crate::model::requests::KeywordsRequest;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

/// Keywords API client backed by [`HttpClient`]
#[derive(Debug, Clone)]
pub struct KeywordsClient {
    http_client: HttpClient,
}

impl KeywordsClient {
    /// Creates a client from a configuration
    pub fn new(config: Config) -> BuiltWithResult<Self> {
        Ok(Self::with_http_client(HttpClient::new(config)?))
    }

    /// Creates a client on top of an existing executor
    pub fn with_http_client(http_client: HttpClient) -> Self {
        Self { http_client }
    }

    /// Configuration in use
    #[must_use]
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }
}

#[async_trait]
impl KeywordsService for KeywordsClient {
    async fn get_keywords(&self, request: &KeywordsRequest) -> BuiltWithResult<Value> {
        self.get_keywords_as(request, KeywordsFormat::Json)
            .await?
            .into_structured()
            .ok_or_else(|| AppError::RemoteApi("expected a JSON response".to_string()))
    }

    async fn get_keywords_as(
        &self,
        request: &KeywordsRequest,
        format: KeywordsFormat,
    ) -> BuiltWithResult<ApiResponse> {
        let params = request.to_params(self.http_client.api_key())?;
        info!(
            "Getting keywords for {} domains as {}",
            request.len(),
            format.extension()
        );
        self.http_client
            .get(
                KEYWORDS_API_PATH,
                format.extension(),
                &params,
                format.is_structured(),
            )
            .await
    }
}
