// src/controller/decode.rs
use crate::api::PricingApi;
use crate::controller::{FormController, LoadingScope};
use crate::domain::vin::has_vin_length;
use crate::errors::FormError;
use tracing::{debug, info, warn};

pub const VIN_LENGTH_MSG: &str = "VIN must be exactly 17 characters";
pub const DECODED_MSG: &str = "✓ VIN has been decoded into the filters below!";
pub const DECODE_FAILED_MSG: &str = "Failed to decode VIN";
pub const DECODE_NETWORK_MSG: &str = "Network error: Unable to decode VIN";

impl FormController {
    /// Decode the current VIN and copy the result onto the filters.
    ///
    /// On any failure the filters are left as they were.
    pub fn decode_vin<A: PricingApi>(&mut self, api: &A) -> Result<(), FormError> {
        let vin = self.filters.vin.trim().to_string();

        if !has_vin_length(&vin) {
            debug!(len = vin.len(), "decode rejected: VIN length");
            return self.fail(FormError::Validation(VIN_LENGTH_MSG.into()));
        }

        self.ui.hide_messages();

        let outcome = {
            let _loading = LoadingScope::enter(&mut self.ui.loading);
            api.decode_vin(&vin)
        };

        let resp = match outcome {
            Ok(resp) => resp,
            Err(e) => {
                warn!(%vin, error = %e, "decode request failed");
                return self.fail(FormError::Transport(DECODE_NETWORK_MSG.into()));
            }
        };

        let error_text = resp.error_text().map(str::to_string);
        match (resp.success, resp.data) {
            (true, Some(record)) => {
                self.filters.populate_from_vin(&record);
                info!(
                    %vin,
                    year = ?record.year(),
                    make = ?record.make(),
                    model = ?record.model(),
                    "VIN decoded"
                );
                self.decoded = Some(record);
                self.ui.show_success(DECODED_MSG);
                Ok(())
            }
            (success, _) => {
                let text = error_text.unwrap_or_else(|| DECODE_FAILED_MSG.to_string());
                warn!(%vin, success, error = %text, "backend could not decode VIN");
                self.fail(FormError::ServerReported(text))
            }
        }
    }
}
