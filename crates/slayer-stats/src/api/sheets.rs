//! Google Sheets API client

use crate::api::RecordSource;
use crate::error::{Result, StatsError};
use crate::records::{ColumnIndex, MatchRecord};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Google Sheets API client
///
/// Reads one worksheet of the configured spreadsheet through the v4 values
/// endpoint with API-key authentication. Every call is a fresh full fetch.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    api_key: String,
    spreadsheet_id: String,
    worksheet: String,
    base_url: String,
}

/// Response shape of the values endpoint
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

impl SheetsClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `api_key` - Google API key with Sheets read access
    /// * `locator` - full spreadsheet URL or bare spreadsheet id
    /// * `worksheet` - tab name holding the match rows
    /// * `timeout` - request timeout
    pub fn new(
        api_key: impl Into<String>,
        locator: &str,
        worksheet: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let spreadsheet_id = spreadsheet_id_from_locator(locator)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            spreadsheet_id,
            worksheet: worksheet.into(),
            base_url: SHEETS_API_BASE.to_string(),
        })
    }

    /// Override the API base URL (used to point tests at a local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create from environment variables `GOOGLE_SHEETS_API_KEY` and
    /// `GOOGLE_SHEET` (locator), with the default worksheet
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GOOGLE_SHEETS_API_KEY").map_err(|_| {
            StatsError::Config("GOOGLE_SHEETS_API_KEY environment variable not set".to_string())
        })?;
        let locator = std::env::var("GOOGLE_SHEET").map_err(|_| {
            StatsError::Config("GOOGLE_SHEET environment variable not set".to_string())
        })?;

        Self::new(api_key, &locator, "Sheet1", Duration::from_secs(30))
    }

    /// Spreadsheet id this client reads from
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    async fn fetch_values(&self) -> Result<Vec<Vec<Value>>> {
        let url = format!(
            "{}/{}/values/{}",
            self.base_url, self.spreadsheet_id, self.worksheet
        );

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| StatsError::SourceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    StatsError::Authentication(error_text)
                }
                StatusCode::NOT_FOUND => StatsError::SourceUnavailable(format!(
                    "spreadsheet or worksheet '{}' not found",
                    self.worksheet
                )),
                _ => StatsError::SourceUnavailable(format!("HTTP {status}: {error_text}")),
            });
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|e| StatsError::SourceUnavailable(format!("malformed response: {e}")))?;

        Ok(range.values)
    }
}

#[async_trait]
impl RecordSource for SheetsClient {
    #[instrument(skip(self), fields(spreadsheet = %self.spreadsheet_id, worksheet = %self.worksheet))]
    async fn fetch_records(&self) -> Result<Vec<MatchRecord>> {
        let values = self.fetch_values().await?;

        let Some((header, rows)) = values.split_first() else {
            return Ok(Vec::new());
        };

        let columns = ColumnIndex::from_header(header)?;
        let records = rows
            .iter()
            .map(|row| MatchRecord::from_row(row, &columns))
            .collect::<Vec<_>>();

        debug!("Fetched {} match records", records.len());
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "google-sheets"
    }
}

/// Extract the spreadsheet id from a full URL, or pass a bare id through
///
/// Sheet URLs look like
/// `https://docs.google.com/spreadsheets/d/{id}/edit#gid=0`.
fn spreadsheet_id_from_locator(locator: &str) -> Result<String> {
    if !locator.contains("://") {
        if locator.is_empty() {
            return Err(StatsError::InvalidLocator("empty locator".to_string()));
        }
        return Ok(locator.to_string());
    }

    let url =
        Url::parse(locator).map_err(|e| StatsError::InvalidLocator(format!("{locator}: {e}")))?;

    let mut segments = url
        .path_segments()
        .ok_or_else(|| StatsError::InvalidLocator(locator.to_string()))?;

    // .../spreadsheets/d/{id}/...
    while let Some(segment) = segments.next() {
        if segment == "d" {
            if let Some(id) = segments.next() {
                if !id.is_empty() {
                    return Ok(id.to_string());
                }
            }
        }
    }

    Err(StatsError::InvalidLocator(format!(
        "no spreadsheet id in '{locator}'"
    )))
}
