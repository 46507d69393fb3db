/// Keywords API interface
pub mod keywords;
/// Lists API interface
pub mod lists;

pub use keywords::KeywordsService;
pub use lists::ListsService;
