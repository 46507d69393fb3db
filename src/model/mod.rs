/// Response format selectors and the format-tagged response body
pub mod format;
/// Shared HTTP executor
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
