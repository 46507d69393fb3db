use crate::constants::MAX_LOOKUP_DOMAINS;
use crate::error::{AppError, BuiltWithResult};
use crate::model::format::{ApiResponse, KeywordsFormat};
use crate::model::requests::KeywordsRequest;
use crate::model::responses::KeywordsBatchResult;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Interface for the Keywords API: keywords for root domains
#[async_trait]
pub trait KeywordsService: Send + Sync {
    /// Fetches keywords for up to 16 domains as parsed JSON
    ///
    /// # Errors
    /// `Validation` for an empty list or more than 16 domains, `RemoteApi`
    /// if the API reports an error or the request fails.
    async fn get_keywords(&self, request: &KeywordsRequest) -> BuiltWithResult<Value>;

    /// Fetches keywords in the given format
    async fn get_keywords_as(
        &self,
        request: &KeywordsRequest,
        format: KeywordsFormat,
    ) -> BuiltWithResult<ApiResponse>;

    /// Fetches keywords for any number of domains, `batch_size` per request
    ///
    /// Batches are sent one after another in input order. Responses that are
    /// not JSON objects are left out and counted in
    /// [`KeywordsBatchResult::skipped`].
    ///
    /// # Errors
    /// `Validation` if `batch_size` is 0 or above 16. The first failing batch
    /// aborts the whole call.
    async fn get_keywords_batch(
        &self,
        domains: &[String],
        batch_size: usize,
    ) -> BuiltWithResult<KeywordsBatchResult> {
        if batch_size == 0 || batch_size > MAX_LOOKUP_DOMAINS {
            return Err(AppError::Validation(format!(
                "batch size must be between 1 and {MAX_LOOKUP_DOMAINS}, got {batch_size}"
            )));
        }

        let mut aggregate = KeywordsBatchResult::default();

        for (index, chunk) in domains.chunks(batch_size).enumerate() {
            debug!("Keywords batch {} with {} domains", index + 1, chunk.len());
            let request = KeywordsRequest::for_domains(chunk.iter().cloned());
            let response = self.get_keywords_as(&request, KeywordsFormat::Json).await?;
            aggregate.batches += 1;

            match response {
                ApiResponse::Structured(value @ Value::Object(_)) => aggregate.results.push(value),
                _ => {
                    warn!(
                        "Skipping keywords batch {}: response is not a JSON object",
                        index + 1
                    );
                    aggregate.skipped += 1;
                }
            }
        }

        info!(
            "Keywords for {} domains fetched in {} batches ({} skipped)",
            domains.len(),
            aggregate.batches,
            aggregate.skipped
        );
        Ok(aggregate)
    }
}
