// src/controller/lookup.rs
use crate::api::PricingApi;
use crate::controller::{FormController, LoadingScope};
use crate::domain::filters::ODOMETER_MAX;
use crate::domain::vehicle::parse_leading_int;
use crate::domain::vin::has_vin_length;
use crate::errors::FormError;
use tracing::{debug, info, warn};

pub const DECODE_FIRST_MSG: &str = "Please enter a valid 17-character VIN first and decode it";
pub const ODOMETER_MSG: &str = "Please enter a valid odometer reading";
pub const PRICING_OK_MSG: &str = "Pricing data retrieved successfully!";
pub const PRICING_FAILED_MSG: &str = "Failed to fetch pricing data";
pub const PRICING_NETWORK_MSG: &str = "Network error: Unable to fetch data";

impl FormController {
    /// Fetch pricing cards for the current VIN at `raw_mileage` km and show
    /// them. Returns how many cards came back.
    ///
    /// Readings above the slider's ceiling are sent as the ceiling.
    ///
    /// A failed lookup leaves the results panel exactly as it was, visible
    /// or not.
    pub fn lookup_pricing<A: PricingApi>(
        &mut self,
        api: &A,
        raw_mileage: &str,
    ) -> Result<usize, FormError> {
        let vin = self.filters.vin.trim().to_string();

        if !has_vin_length(&vin) {
            debug!(len = vin.len(), "pricing rejected: VIN length");
            return self
                .fail(FormError::Validation(DECODE_FIRST_MSG.into()))
                .map(|_| 0);
        }

        let mileage = match parse_leading_int(raw_mileage) {
            Some(km) if km >= 0 => km.min(ODOMETER_MAX),
            _ => {
                debug!(raw_mileage, "pricing rejected: odometer");
                return self
                    .fail(FormError::Validation(ODOMETER_MSG.into()))
                    .map(|_| 0);
            }
        };

        self.ui.hide_messages();

        let outcome = {
            let _loading = LoadingScope::enter(&mut self.ui.loading);
            api.pricing_cards(&vin, mileage)
        };

        let resp = match outcome {
            Ok(resp) => resp,
            Err(e) => {
                warn!(%vin, mileage, error = %e, "pricing request failed");
                return self
                    .fail(FormError::Transport(PRICING_NETWORK_MSG.into()))
                    .map(|_| 0);
            }
        };

        let error_text = resp.error_text().map(str::to_string);
        let cards = match resp.cards {
            Some(cards) if !cards.is_empty() => cards,
            _ => {
                let text = error_text.unwrap_or_else(|| PRICING_FAILED_MSG.to_string());
                warn!(%vin, mileage, error = %text, "no pricing cards");
                return self.fail(FormError::ServerReported(text)).map(|_| 0);
            }
        };

        self.results.apply(&cards);
        self.ui.show_success(PRICING_OK_MSG);
        self.ui.results_visible = true;
        self.ui.scroll_after = Some(self.scroll_delay);

        info!(%vin, mileage, cards = cards.len(), "pricing cards rendered");
        Ok(cards.len())
    }
}
