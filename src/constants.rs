/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// Default base URL for the BuiltWith API
pub const DEFAULT_BASE_URL: &str = "https://api.builtwith.com";
/// Path prefix of the Lists API; the format extension is appended (`api.json`, `api.csv`, ...)
pub const LISTS_API_PATH: &str = "lists12/api";
/// Path prefix of the Keywords API; the format extension is appended
pub const KEYWORDS_API_PATH: &str = "kw2/api";
/// Default timeout in seconds for every request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Maximum number of domains the Keywords API accepts in one `LOOKUP`
pub const MAX_LOOKUP_DOMAINS: usize = 16;
/// `NextOffset` value the Lists API sends on the last page
pub const END_OFFSET: &str = "END";
/// Field the API uses to report errors in JSON responses
pub const ERRORS_FIELD: &str = "Errors";
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("builtwith-client/", env!("CARGO_PKG_VERSION"));
/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BUILTWITH_API_KEY";
