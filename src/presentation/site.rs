use crate::model::responses::SiteRecord;
use crate::presentation::serialization::epoch_to_datetime;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A Lists API site with descriptive field names and parsed timestamps
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SiteDetails {
    /// Domain of the site
    pub domain: Option<String>,
    /// Locations on the site where the technology was found
    pub locations_on_site: Vec<Value>,
    /// When the technology was first detected
    pub first_detected: Option<DateTime<Utc>>,
    /// When the technology was last detected
    pub last_detected: Option<DateTime<Utc>>,
    /// Monthly technology spend in USD
    pub monthly_spend_usd: Option<Number>,
    /// Number of unique products
    pub unique_products: Option<i64>,
    /// Estimated revenue
    pub estimated_revenue: Option<Number>,
    /// Social media followers
    pub social_followers: Option<i64>,
    /// Number of employees
    pub employee_count: Option<i64>,
    /// BuiltWith page rank
    pub page_rank: Option<i64>,
    /// Tranco list rank
    pub tranco_rank: Option<i64>,
    /// Majestic Million rank
    pub majestic_rank: Option<i64>,
    /// Cisco Umbrella rank
    pub umbrella_rank: Option<i64>,
    /// `META` block, untouched; `Some(Value::Null)` when the API sent `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl From<&SiteRecord> for SiteDetails {
    fn from(record: &SiteRecord) -> Self {
        SiteDetails {
            domain: record.domain.clone(),
            locations_on_site: record.locations_on_site.clone(),
            first_detected: epoch_to_datetime(record.first_detected),
            last_detected: epoch_to_datetime(record.last_detected),
            monthly_spend_usd: record.spend.clone(),
            unique_products: record.sku,
            estimated_revenue: record.revenue.clone(),
            social_followers: record.followers,
            employee_count: record.employees,
            page_rank: record.page_rank,
            tranco_rank: record.tranco_rank,
            majestic_rank: record.majestic_rank,
            umbrella_rank: record.umbrella_rank,
            metadata: record.meta.clone(),
        }
    }
}

impl From<SiteRecord> for SiteDetails {
    fn from(record: SiteRecord) -> Self {
        SiteDetails::from(&record)
    }
}
