// src/controller/mod.rs
//
// One FormController per browser session. It owns every piece of state the
// page shows and runs the decode and pricing workflows against a backend.

mod decode;
mod input;
mod lookup;
mod ui;

pub use input::FormInput;
pub use ui::{LoadingScope, Message, UiState};

use crate::domain::vin::sanitize_vin;
use crate::domain::{FilterState, ResultsView, VinRecord};
use crate::errors::FormError;
use std::time::Duration;

pub const MORE_FILTERS_MSG: &str = "More filter options coming soon!";

#[derive(Debug, Clone)]
pub struct FormController {
    pub filters: FilterState,
    pub ui: UiState,
    pub results: ResultsView,
    decoded: Option<VinRecord>,
    scroll_delay: Duration,
}

impl FormController {
    /// `scroll_delay` is how long the page waits after revealing results
    /// before scrolling them into view.
    pub fn new(scroll_delay: Duration) -> Self {
        Self {
            filters: FilterState::default(),
            ui: UiState::default(),
            results: ResultsView::default(),
            decoded: None,
            scroll_delay,
        }
    }

    /// The record from the last successful decode. Clear leaves it in
    /// place; only another decode replaces it.
    pub fn decoded(&self) -> Option<&VinRecord> {
        self.decoded.as_ref()
    }

    /// Keystroke handler for the VIN box.
    pub fn input_vin(&mut self, raw: &str) -> &str {
        self.filters.vin = sanitize_vin(raw);
        &self.filters.vin
    }

    /// Mirror submitted control values into the filter state.
    ///
    /// Slider values are taken without touching their labels; labels only
    /// move through the slide handlers.
    pub fn apply_input(&mut self, input: &FormInput) {
        if let Some(vin) = &input.vin {
            self.input_vin(vin);
        }
        if let Some(year) = input.year_value() {
            self.filters.set_year_value(year);
        }
        if let Some(km) = input.odometer_value().filter(|km| *km >= 0) {
            self.filters.set_odometer_value(km);
        }

        let f = &mut self.filters;
        let selects = [
            (&input.make, &mut f.make),
            (&input.model, &mut f.model),
            (&input.trim, &mut f.trim),
            (&input.province, &mut f.province),
            (&input.sale_date, &mut f.sale_date),
        ];
        for (value, control) in selects {
            if let Some(value) = value {
                control.select(value);
            }
        }
    }

    pub fn slide_year(&mut self, year: i64) {
        self.filters.slide_year(year);
    }

    pub fn slide_odometer(&mut self, km: i64) {
        self.filters.slide_odometer(km);
    }

    /// Clear button: default filters, hidden results, no message.
    pub fn clear(&mut self) {
        self.filters.reset();
        self.ui.results_visible = false;
        self.ui.scroll_after = None;
        self.ui.hide_messages();
    }

    pub fn more_filters(&mut self) {
        self.ui.show_info(MORE_FILTERS_MSG);
    }

    /// The pending scroll request, consumed by the next page render.
    pub fn take_scroll(&mut self) -> Option<Duration> {
        self.ui.scroll_after.take()
    }

    fn fail(&mut self, err: FormError) -> Result<(), FormError> {
        self.ui.show_error(err.to_string());
        Err(err)
    }
}
