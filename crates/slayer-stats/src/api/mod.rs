//! Record source clients

mod sheets;

pub use sheets::SheetsClient;

use crate::error::Result;
use crate::records::MatchRecord;
use async_trait::async_trait;

/// Trait for record sources
///
/// The dashboard fetches through this seam so tests can feed it canned rows.
/// Every call returns the complete current row collection, order preserved as
/// provided by the source; there is no caching between invocations.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the full current record collection
    async fn fetch_records(&self) -> Result<Vec<MatchRecord>>;

    /// Get the source name (e.g., "google-sheets")
    fn name(&self) -> &str;
}
