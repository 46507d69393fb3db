use crate::application::services::pages::TechListPages;
use crate::error::BuiltWithResult;
use crate::model::format::{ApiResponse, ListFormat};
use crate::model::requests::TechListRequest;
use crate::model::responses::{SiteRecord, TechListPage};
use async_trait::async_trait;
use tracing::info;

/// Interface for the Lists API: sites using a given technology
#[async_trait]
pub trait ListsService: Send + Sync {
    /// Fetches one page as parsed JSON
    ///
    /// # Arguments
    /// * `request` - Technology and filters; `offset` selects the page
    ///
    /// # Errors
    /// `Validation` if `since` and `include_all` are both set, `RemoteApi`
    /// if the API reports an error or the request fails.
    async fn get_tech_list(&self, request: &TechListRequest) -> BuiltWithResult<TechListPage>;

    /// Fetches one page in the given format
    ///
    /// JSON yields [`ApiResponse::Structured`]; xml, txt, csv and tsv yield
    /// [`ApiResponse::Raw`] with the body untouched.
    async fn get_tech_list_as(
        &self,
        request: &TechListRequest,
        format: ListFormat,
    ) -> BuiltWithResult<ApiResponse>;

    /// Lazy page iterator starting at the first page
    ///
    /// The offset of `request` is ignored. At most `max_pages` pages are
    /// fetched when a cap is given.
    fn pages(&self, request: &TechListRequest, max_pages: Option<usize>) -> TechListPages<'_, Self>
    where
        Self: Sized,
    {
        TechListPages::new(self, request.clone(), max_pages)
    }

    /// Fetches every page and concatenates their results in order
    async fn get_all_tech_list(
        &self,
        request: &TechListRequest,
        max_pages: Option<usize>,
    ) -> BuiltWithResult<Vec<SiteRecord>> {
        let mut pages = TechListPages::new(self, request.clone(), max_pages);
        let mut all_results = Vec::new();

        while let Some(page) = pages.next_page().await? {
            all_results.extend(page.results);
        }

        info!(
            "Collected {} sites for {} over {} pages",
            all_results.len(),
            request.technology,
            pages.pages_fetched()
        );
        Ok(all_results)
    }
}
