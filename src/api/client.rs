// src/api/client.rs
use crate::api::models::{DecodeRequest, DecodeResponse, PricingRequest, PricingResponse};
use crate::api::{ApiError, PricingApi};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

const DECODE_PATH: &str = "api/decode-vin";
const PRICING_PATH: &str = "api/pricing-cards";

/// Talks JSON to the backend over HTTP(S).
pub struct HttpPricingApi {
    client: Client,
    base_url: Url,
}

impl HttpPricingApi {
    /// `timeout: None` leaves the call unbounded; only the transport gives up.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Transport(format!("invalid backend url {base_url}: {e}")))?;

        // so that join() appends instead of replacing the last segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Transport(format!("bad endpoint {path}: {e}")))
    }

    /// The backend answers failures with 4xx/5xx and a JSON body, so the
    /// body is parsed whatever the status.
    fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;

        let resp = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(%url, status = status.as_u16(), bytes = text.len(), "backend responded");

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(format!("HTTP {status}: {e}")))
    }
}

impl PricingApi for HttpPricingApi {
    fn decode_vin(&self, vin: &str) -> Result<DecodeResponse, ApiError> {
        self.post_json(DECODE_PATH, &DecodeRequest { vin })
    }

    fn pricing_cards(&self, vin: &str, mileage: i64) -> Result<PricingResponse, ApiError> {
        self.post_json(PRICING_PATH, &PricingRequest { vin, mileage })
    }
}
