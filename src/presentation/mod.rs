/// Serialization helpers for API responses
pub mod serialization;
/// Normalized site models
pub mod site;

pub use site::SiteDetails;
