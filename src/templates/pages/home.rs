// templates/pages/home.rs

use crate::controller::FormController;
use crate::templates::components::filters::{filter_panel, vin_input};
use crate::templates::components::messages::{loading_indicator, message_area};
use crate::templates::components::results::results_container;
use crate::templates::components::action_button;
use crate::templates::desktop_layout;
use maud::{html, Markup};
use std::time::Duration;

/// The form page. `scroll` is the pending scroll request, if any.
pub fn form_page(c: &FormController, scroll: Option<Duration>) -> Markup {
    desktop_layout("VIN Pricing", app(c, scroll))
}

/// Everything that an action swaps: the `#app` element.
pub fn app(c: &FormController, scroll: Option<Duration>) -> Markup {
    let busy = c.ui.loading;

    html! {
        main id="app" class="container" {
            form id="pricingForm" method="post" action="/results" {
                section class="card vin-entry" {
                    h2 { "Vehicle" }
                    label for="vin" { "VIN" }
                    (vin_input(&c.filters.vin))
                    (action_button("decodeBtn", "Decode VIN", "/decode", busy))
                    (loading_indicator(busy))
                    (message_area(&c.ui))
                    @if let Some(vehicle) = c.decoded() {
                        p id="decodedVehicle" class="decoded" { "Last decoded: " (vehicle.description()) }
                    }
                }

                (filter_panel(&c.filters))

                div class="actions" {
                    (action_button("showResults", "Show Results", "/results", busy))
                    (action_button("clearFilters", "Clear Filters", "/clear", false))
                    (action_button("moreFiltersBtn", "More Filters", "/filters/more", false))
                }
            }

            (results_container(&c.results, c.ui.results_visible, scroll))
        }
    }
}
