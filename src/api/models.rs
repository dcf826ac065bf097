use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Deserialize)]
pub struct ScrapeRequest {
    // Option so a missing field surfaces as our own 400, not a 422 from the
    // JSON extractor.
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct QueryRequest {
    pub question: Option<String>,
}

/// The synthesized payload standing in for a real scrape result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapedDocument {
    pub url: String,
    pub title: String,
    pub sections: Vec<Section>,
    pub metadata: Metadata,
}

/// One titled block of document text. Order is significant; the client
/// renders sections top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub scraped_at: DateTime<Utc>,
    pub word_count: u32,
    pub sections: u32,
    pub policy_type: PolicyType,
    pub jurisdiction: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PolicyType {
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "FERPA")]
    Ferpa,
    #[serde(rename = "HIPAA")]
    Hipaa,
    General,
}

/// Answer relayed from the external query service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub timestamp: String,
}
