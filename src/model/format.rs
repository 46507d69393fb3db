/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response formats offered by the Lists API
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Parsed JSON
    #[default]
    Json,
    /// Raw XML
    Xml,
    /// Raw plain text, one domain per line
    Txt,
    /// Raw comma separated values
    Csv,
    /// Raw tab separated values
    Tsv,
}

impl ListFormat {
    /// File extension used in the endpoint URL
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ListFormat::Json => "json",
            ListFormat::Xml => "xml",
            ListFormat::Txt => "txt",
            ListFormat::Csv => "csv",
            ListFormat::Tsv => "tsv",
        }
    }

    /// Whether the body is parsed as JSON
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, ListFormat::Json)
    }
}

/// Response formats offered by the Keywords API
#[derive(Debug, Copy, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeywordsFormat {
    /// Parsed JSON
    #[default]
    Json,
    /// Raw XML
    Xml,
}

impl KeywordsFormat {
    /// File extension used in the endpoint URL
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            KeywordsFormat::Json => "json",
            KeywordsFormat::Xml => "xml",
        }
    }

    /// Whether the body is parsed as JSON
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, KeywordsFormat::Json)
    }
}

/// Body of an API response, discriminated by the requested format
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// JSON body, already checked for an `Errors` field
    Structured(Value),
    /// Body of any non-JSON format, untouched
    Raw(String),
}

impl ApiResponse {
    /// The parsed JSON, if this is a structured response
    #[must_use]
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            ApiResponse::Structured(v) => Some(v),
            ApiResponse::Raw(_) => None,
        }
    }

    /// The raw body, if this is a non-JSON response
    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ApiResponse::Structured(_) => None,
            ApiResponse::Raw(s) => Some(s),
        }
    }

    /// Consumes the response, returning the parsed JSON if any
    #[must_use]
    pub fn into_structured(self) -> Option<Value> {
        match self {
            ApiResponse::Structured(v) => Some(v),
            ApiResponse::Raw(_) => None,
        }
    }

    /// Consumes the response, returning the raw body if any
    #[must_use]
    pub fn into_raw(self) -> Option<String> {
        match self {
            ApiResponse::Structured(_) => None,
            ApiResponse::Raw(s) => Some(s),
        }
    }
}
