use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::document::CsvDocument;

/// Where the raw CSV exports come from.
///
/// The HTTP implementation talks to the spreadsheet proxy endpoints; tests
/// and offline imports provide their own.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CsvSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the full CSV text of one document.
    async fn fetch(&self, document: CsvDocument) -> Result<String, CoreError>;
}
