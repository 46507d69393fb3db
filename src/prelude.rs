/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # BuiltWith Client Prelude
//!
//! Re-exports the types needed for most Lists and Keywords API calls.
//!
//! ```rust
//! use builtwith_client::prelude::*;
//!
//! let config = Config::with_api_key("my-key");
//! let request = TechListRequest::new("Shopify").with_country("US");
//! assert_eq!(request.tech_param(), "Shopify");
//! # let _ = config;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the BuiltWith clients
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and result alias
pub use crate::error::{AppError, BuiltWithResult};

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::interfaces::{KeywordsService, ListsService};

/// HTTP-backed implementations and the page iterator
pub use crate::application::services::{KeywordsClient, ListsClient, TechListPages};

/// Shared HTTP executor
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Response formats and the format-tagged body
pub use crate::model::format::{ApiResponse, KeywordsFormat, ListFormat};

/// Request models
pub use crate::model::requests::{Country, KeywordsRequest, TechListRequest};

/// Response models
pub use crate::model::responses::{KeywordsBatchResult, SiteRecord, TechListPage};

/// Normalized site view
pub use crate::presentation::SiteDetails;

// ============================================================================
// UTILITIES AND CONSTANTS
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use serde_json::Value;
pub use tracing::{debug, error, info, warn};
