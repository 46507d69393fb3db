/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::END_OFFSET;
use crate::presentation::serialization::{
    lenient_i64_opt, lenient_number_opt, lenient_string_opt, lenient_value_vec, present_value,
};
use crate::presentation::site::SiteDetails;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One site from a Lists API page, keyed by the API's short field codes
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SiteRecord {
    /// Domain (`D`)
    #[serde(rename = "D", default, deserialize_with = "lenient_string_opt")]
    pub domain: Option<String>,
    /// Locations on site where the technology was seen (`LOS`), as sent
    #[serde(rename = "LOS", default, deserialize_with = "lenient_value_vec")]
    pub locations_on_site: Vec<Value>,
    /// First detected, epoch seconds (`FD`)
    #[serde(rename = "FD", default, deserialize_with = "lenient_i64_opt")]
    pub first_detected: Option<i64>,
    /// Last detected, epoch seconds (`LD`)
    #[serde(rename = "LD", default, deserialize_with = "lenient_i64_opt")]
    pub last_detected: Option<i64>,
    /// Monthly technology spend in USD (`S`)
    #[serde(rename = "S", default, deserialize_with = "lenient_number_opt")]
    pub spend: Option<Number>,
    /// Number of unique products (`SKU`)
    #[serde(rename = "SKU", default, deserialize_with = "lenient_i64_opt")]
    pub sku: Option<i64>,
    /// Estimated revenue (`R`)
    #[serde(rename = "R", default, deserialize_with = "lenient_number_opt")]
    pub revenue: Option<Number>,
    /// Social followers (`F`)
    #[serde(rename = "F", default, deserialize_with = "lenient_i64_opt")]
    pub followers: Option<i64>,
    /// Employee count (`E`)
    #[serde(rename = "E", default, deserialize_with = "lenient_i64_opt")]
    pub employees: Option<i64>,
    /// Page rank (`A`)
    #[serde(rename = "A", default, deserialize_with = "lenient_i64_opt")]
    pub page_rank: Option<i64>,
    /// Tranco rank (`Q`)
    #[serde(rename = "Q", default, deserialize_with = "lenient_i64_opt")]
    pub tranco_rank: Option<i64>,
    /// Majestic rank (`M`)
    #[serde(rename = "M", default, deserialize_with = "lenient_i64_opt")]
    pub majestic_rank: Option<i64>,
    /// Umbrella rank (`U`)
    #[serde(rename = "U", default, deserialize_with = "lenient_i64_opt")]
    pub umbrella_rank: Option<i64>,
    /// Company metadata, only present when requested with `META=yes`; a `null` block is kept
    #[serde(
        rename = "META",
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub meta: Option<Value>,
    /// Codes this client does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteRecord {
    /// Descriptive view of this record with parsed timestamps
    #[must_use]
    pub fn normalize(&self) -> SiteDetails {
        SiteDetails::from(self)
    }
}

/// One page of the Lists API
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TechListPage {
    /// Continuation token; `END` on the last page
    #[serde(rename = "NextOffset", default)]
    pub next_offset: Option<String>,
    /// Sites in this page, in API order
    #[serde(rename = "Results", default)]
    pub results: Vec<SiteRecord>,
}

impl TechListPage {
    /// Token for the next page, or `None` if this is the last one
    #[must_use]
    pub fn continuation(&self) -> Option<&str> {
        self.next_offset
            .as_deref()
            .filter(|o| !o.is_empty() && *o != END_OFFSET)
    }

    /// Returns true if no further page follows
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.continuation().is_none()
    }

    /// Sites in this page
    #[must_use]
    pub fn results(&self) -> &[SiteRecord] {
        &self.results
    }

    /// Number of sites in this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the page holds no sites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Aggregate of a batched keywords lookup
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct KeywordsBatchResult {
    /// JSON objects returned by each batch, in batch order
    pub results: Vec<Value>,
    /// Number of requests issued
    pub batches: usize,
    /// Batches whose response was not a JSON object and was left out
    pub skipped: usize,
}

impl KeywordsBatchResult {
    /// Returns true if every batch contributed a result
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped == 0
    }
}
