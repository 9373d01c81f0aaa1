use crate::error::qrng::QrngError;

use common::{ApiKey, ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the ANU quantum random numbers API.
///
/// One outbound GET per [`fetch_bytes`](QrngClient::fetch_bytes) call; no
/// retry, no caching. The response body is returned verbatim - the formatter
/// owns the bounds check between requested and delivered byte counts.
#[derive(Clone)]
pub struct QrngClient {
    base_url: Url,
    client: Client,
}

impl QrngClient {
    pub fn new(base_url_str: &str) -> Result<Self, QrngError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Fetch `length` random bytes from the remote source.
    ///
    /// Sends `GET {base_url}?length={length}&type={data_type}&size={block_size}`
    /// with the key on the `x-api-key` header.
    ///
    /// # Errors
    ///
    /// * [`QrngError::Api`] - non-200 response, carrying status and body text
    /// * [`QrngError::Http`] - transport failure (DNS, connect, timeout)
    pub async fn fetch_bytes(
        &self,
        api_key: &ApiKey,
        length: u8,
        data_type: &str,
        block_size: u32,
    ) -> Result<Vec<u8>, QrngError> {
        debug!(
            "Requesting {length} quantum bytes (type={data_type}, size={block_size}) from {}",
            self.base_url
        );

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[
                ("length", length.to_string()),
                ("type", data_type.to_string()),
                ("size", block_size.to_string()),
            ])
            .header(API_KEY_HEADER, api_key.expose())
            .send()
            .await?;

        let status = HttpStatusCode::from(response.status().as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("QRNG API rejected request: HTTP {status} - {body}");
            return Err(QrngError::Api {
                status,
                body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let bytes = response.bytes().await?.to_vec();
        debug!("QRNG API delivered {} bytes", bytes.len());

        Ok(bytes)
    }
}
