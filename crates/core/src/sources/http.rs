use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::document::CsvDocument;
use crate::models::settings::TrackerConfig;
use super::traits::CsvSource;

/// Fetches CSV exports from the proxy endpoints configured in [`TrackerConfig`].
///
/// One GET per document; any non-2xx status is an error carrying the status code.
pub struct HttpCsvSource {
    client: Client,
    config: TrackerConfig,
}

impl HttpCsvSource {
    pub fn new(config: TrackerConfig) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(config.request_timeout_secs));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            config,
        }
    }

    pub fn url_for(&self, document: CsvDocument) -> String {
        self.config.url_for(document)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CsvSource for HttpCsvSource {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch(&self, document: CsvDocument) -> Result<String, CoreError> {
        let response = self.client.get(self.url_for(document)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Http {
                document,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_document_urls_from_config() {
        let source = HttpCsvSource::new(TrackerConfig {
            base_url: "https://wealth.example.com".into(),
            ..TrackerConfig::default()
        });
        assert_eq!(source.name(), "HTTP");
        assert_eq!(
            source.url_for(CsvDocument::Investments),
            "https://wealth.example.com/.netlify/functions/investments"
        );
        assert_eq!(
            source.url_for(CsvDocument::Assets),
            "https://wealth.example.com/.netlify/functions/assets"
        );
    }
}
