/// Keywords API client
pub mod keywords_service;
/// Lists API client
pub mod lists_service;
/// Lazy Lists API pagination
pub mod pages;

pub use keywords_service::KeywordsClient;
pub use lists_service::ListsClient;
pub use pages::TechListPages;
