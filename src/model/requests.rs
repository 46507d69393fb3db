/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::constants::MAX_LOOKUP_DOMAINS;
use crate::error::{AppError, BuiltWithResult};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Query parameters as sent on the wire, in insertion order
pub type QueryParams = Vec<(&'static str, String)>;

/// Country filter: a single ISO 3166-1 alpha-2 code or several of them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Country {
    /// One country code, e.g. `US`
    Single(String),
    /// Several country codes, sent comma-joined
    List(Vec<String>),
}

impl Country {
    /// Value of the `COUNTRY` parameter, `None` when there is nothing to filter on
    #[must_use]
    pub fn to_param(&self) -> Option<String> {
        let value = match self {
            Country::Single(code) => code.clone(),
            Country::List(codes) => codes.join(","),
        };
        (!value.is_empty()).then_some(value)
    }
}

impl From<&str> for Country {
    fn from(code: &str) -> Self {
        Country::Single(code.to_string())
    }
}

impl From<String> for Country {
    fn from(code: String) -> Self {
        Country::Single(code)
    }
}

impl From<Vec<String>> for Country {
    fn from(codes: Vec<String>) -> Self {
        Country::List(codes)
    }
}

impl From<Vec<&str>> for Country {
    fn from(codes: Vec<&str>) -> Self {
        Country::List(codes.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Country {
    fn from(codes: &[&str]) -> Self {
        Country::List(codes.iter().map(|c| c.to_string()).collect())
    }
}

/// Parameters of a Lists API query
///
/// ```
/// use builtwith_client::model::requests::TechListRequest;
///
/// let request = TechListRequest::new("Shopify App")
///     .with_country(vec!["US", "CA"])
///     .with_meta(true);
/// let params = request.to_params("key").unwrap();
/// assert!(params.contains(&("TECH", "Shopify-App".to_string())));
/// assert!(params.contains(&("COUNTRY", "US,CA".to_string())));
/// ```
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TechListRequest {
    /// Technology name, e.g. `Shopify`; spaces are sent as hyphens
    pub technology: String,
    /// Request company metadata (names, emails, phones, social)
    pub include_meta: bool,
    /// Country filter
    pub country: Option<Country>,
    /// Continuation token taken from a previous page's `NextOffset`
    pub offset: Option<String>,
    /// Only sites changed since this date, e.g. `2024-01-01` or `30 Days Ago`
    pub since: Option<String>,
    /// Include sites that stopped using the technology
    pub include_all: bool,
}

impl TechListRequest {
    /// Creates a request for the given technology with no filters
    pub fn new(technology: impl Into<String>) -> Self {
        Self {
            technology: technology.into(),
            ..Default::default()
        }
    }

    /// Sets whether company metadata is included
    #[must_use]
    pub fn with_meta(mut self, include_meta: bool) -> Self {
        self.include_meta = include_meta;
        self
    }

    /// Sets the country filter
    #[must_use]
    pub fn with_country(mut self, country: impl Into<Country>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the continuation token
    #[must_use]
    pub fn with_offset(mut self, offset: impl Into<String>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    /// Sets the date filter
    #[must_use]
    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Sets whether sites that dropped the technology are included
    #[must_use]
    pub fn with_include_all(mut self, include_all: bool) -> Self {
        self.include_all = include_all;
        self
    }

    /// Technology name as the API expects it
    #[must_use]
    pub fn tech_param(&self) -> String {
        self.technology.replace(' ', "-")
    }

    /// Rejects combinations the API does not accept
    pub fn validate(&self) -> BuiltWithResult<()> {
        let has_since = self.since.as_deref().is_some_and(|s| !s.is_empty());
        if has_since && self.include_all {
            return Err(AppError::Validation(
                "'since' cannot be combined with 'include_all'".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the query parameters, `KEY` first
    pub fn to_params(&self, api_key: &str) -> BuiltWithResult<QueryParams> {
        self.validate()?;

        let mut params: QueryParams = vec![("KEY", api_key.to_string()), ("TECH", self.tech_param())];

        if self.include_meta {
            params.push(("META", "yes".to_string()));
        }
        if let Some(country) = self.country.as_ref().and_then(Country::to_param) {
            params.push(("COUNTRY", country));
        }
        if let Some(offset) = self.offset.as_deref().filter(|o| !o.is_empty()) {
            params.push(("OFFSET", offset.to_string()));
        }
        if let Some(since) = self.since.as_deref().filter(|s| !s.is_empty()) {
            params.push(("SINCE", since.to_string()));
        }
        if self.include_all {
            params.push(("ALL", "yes".to_string()));
        }

        Ok(params)
    }
}

/// Parameters of a Keywords API query: one to sixteen root domains
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KeywordsRequest {
    /// Root domains, without subdomain prefix
    pub domains: Vec<String>,
}

impl KeywordsRequest {
    /// Request for a single domain
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domains: vec![domain.into()],
        }
    }

    /// Request for several domains, kept in the given order
    pub fn for_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of domains in the request
    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Returns true if no domain was given
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Checks the domain count against the API limit
    pub fn validate(&self) -> BuiltWithResult<()> {
        if self.domains.is_empty() {
            return Err(AppError::Validation(
                "at least one domain is required".to_string(),
            ));
        }
        if self.domains.len() > MAX_LOOKUP_DOMAINS {
            return Err(AppError::Validation(format!(
                "maximum {} domains allowed per request, got {}",
                MAX_LOOKUP_DOMAINS,
                self.domains.len()
            )));
        }
        Ok(())
    }

    /// Builds the query parameters, `KEY` first
    pub fn to_params(&self, api_key: &str) -> BuiltWithResult<QueryParams> {
        self.validate()?;
        Ok(vec![
            ("KEY", api_key.to_string()),
            ("LOOKUP", self.domains.join(",")),
        ])
    }
}
