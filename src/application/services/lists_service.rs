/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::ListsService;
use crate::constants::LISTS_API_PATH;
use crate::error::{AppError, BuiltWithResult};
use crate::model::format::{ApiResponse, ListFormat};
use crate::model::http::HttpClient;
use crate::model::requests::TechListRequest;
use crate::model::responses::TechListPage;
use async_trait::async_trait;
use tracing::{debug, info};

/// Lists API client backed by [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ListsClient {
    http_client: HttpClient,
}

impl ListsClient {
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
impl ListsService for ListsClient {
    async fn get_tech_list(&self, request: &TechListRequest) -> BuiltWithResult<TechListPage> {
        let value = self
            .get_tech_list_as(request, ListFormat::Json)
            .await?
            .into_structured()
            .ok_or_else(|| AppError::RemoteApi("expected a JSON response".to_string()))?;

        let page: TechListPage = serde_json::from_value(value)?;
        debug!(
            "Tech list page for {}: {} sites, next offset {:?}",
            request.technology,
            page.len(),
            page.next_offset
        );
        Ok(page)
    }

    async fn get_tech_list_as(
        &self,
        request: &TechListRequest,
        format: ListFormat,
    ) -> BuiltWithResult<ApiResponse> {
        let params = request.to_params(self.http_client.api_key())?;
        info!(
            "Getting tech list for {} as {}",
            request.tech_param(),
            format.extension()
        );
        self.http_client
            .get(
                LISTS_API_PATH,
                format.extension(),
                &params,
                format.is_structured(),
            )
            .await
    }
}
