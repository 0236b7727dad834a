// src/api/mod.rs
//
// The decode / pricing backend, seen from the form.

mod client;
mod models;

pub use client::HttpPricingApi;
pub use models::{DecodeResponse, PricingResponse};

use thiserror::Error;

/// Failures below the JSON level: the call never produced a usable body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unreadable response: {0}")]
    Decode(String),
}

/// The two endpoints the form talks to.
///
/// A backend that answers with `success: false` or an empty card list is
/// still an `Ok` here; judging the payload is the workflow's job.
pub trait PricingApi {
    fn decode_vin(&self, vin: &str) -> Result<DecodeResponse, ApiError>;

    fn pricing_cards(&self, vin: &str, mileage: i64) -> Result<PricingResponse, ApiError>;
}
