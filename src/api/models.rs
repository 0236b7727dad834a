// src/api/models.rs
use crate::domain::{PricingCard, VinRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct DecodeRequest<'a> {
    pub vin: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PricingRequest<'a> {
    pub vin: &'a str,
    pub mileage: i64,
}

// {
//   "success": true,
//   "data": { "year": 2020, "make": "Honda", "model": "Civic", "series": "EX", ... },
//   "error": "..."
// }
#[derive(Debug, Default, Deserialize)]
pub struct DecodeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(alias = "vehicle_info")]
    pub data: Option<VinRecord>,
    pub error: Option<String>,
}

// { "cards": [ { "province": "Ontario", ... } ], "error": "..." }
#[derive(Debug, Default, Deserialize)]
pub struct PricingResponse {
    pub cards: Option<Vec<PricingCard>>,
    pub error: Option<String>,
}

impl DecodeResponse {
    /// Blank server messages are treated as absent.
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }
}

impl PricingResponse {
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }
}

// Canned replies for fakes.
#[cfg(test)]
impl DecodeResponse {
    pub fn decoded(record: VinRecord) -> Self {
        Self {
            success: true,
            data: Some(record),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
impl PricingResponse {
    pub fn with_cards(cards: Vec<PricingCard>) -> Self {
        Self {
            cards: Some(cards),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            cards: None,
            error: Some(error.into()),
        }
    }
}
