/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::interfaces::ListsService;
use crate::error::BuiltWithResult;
use crate::model::requests::TechListRequest;
use crate::model::responses::TechListPage;
use tracing::{debug, info};

/// Pull-based iterator over Lists API pages
///
/// Each call to [`next_page`](Self::next_page) performs at most one request,
/// using the `NextOffset` of the previous page. Iteration ends when a page has
/// no continuation token, the token is `END`, the page cap is reached, or a
/// request fails. Dropping the iterator stops it; there is no prefetch.
///
/// ```ignore
/// let mut pages = client.pages(&TechListRequest::new("Shopify"), Some(5));
/// while let Some(page) = pages.next_page().await? {
///     println!("{} sites", page.len());
/// }
/// ```
pub struct TechListPages<'a, S: ListsService + ?Sized> {
    service: &'a S,
    request: TechListRequest,
    max_pages: Option<usize>,
    fetched: usize,
    finished: bool,
}

impl<'a, S: ListsService + ?Sized> TechListPages<'a, S> {
    /// Starts a pager at the first page; any offset in `request` is dropped
    pub fn new(service: &'a S, mut request: TechListRequest, max_pages: Option<usize>) -> Self {
        request.offset = None;
        Self {
            service,
            request,
            max_pages,
            fetched: 0,
            finished: false,
        }
    }

    /// Returns true if the next call to `next_page` will issue a request
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.finished && self.max_pages.is_none_or(|max| self.fetched < max)
    }

    /// Number of pages fetched so far
    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.fetched
    }

    /// Offset the next request will carry, `None` for the first page
    #[must_use]
    pub fn current_offset(&self) -> Option<&str> {
        self.request.offset.as_deref()
    }

    /// Fetches the next page, or returns `Ok(None)` once iteration is over
    ///
    /// An error ends the iteration; later calls return `Ok(None)`.
    pub async fn next_page(&mut self) -> BuiltWithResult<Option<TechListPage>> {
        if !self.has_next() {
            return Ok(None);
        }

        let page = match self.service.get_tech_list(&self.request).await {
            Ok(page) => page,
            Err(e) => {
                self.finished = true;
                return Err(e);
            }
        };
        self.fetched += 1;

        info!(
            "Fetched page {} for {}: {} sites",
            self.fetched,
            self.request.technology,
            page.len()
        );

        match page.continuation() {
            Some(token) => {
                debug!("Next offset: {}", token);
                self.request.offset = Some(token.to_string());
            }
            None => {
                debug!("Last page reached for {}", self.request.technology);
                self.finished = true;
            }
        }

        Ok(Some(page))
    }
}
