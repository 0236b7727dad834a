use crate::domain::{Region, ResultsView};
use crate::templates::components::region_container;
use maud::{html, Markup};
use std::time::Duration;

fn stat(id: &str, label: &str, value: &str) -> Markup {
    html! {
        div class="stat" {
            div class="stat-label" { (label) }
            div class="stat-value" id=(id) { (value) }
        }
    }
}

/// Summary rows plus one container per region. `scroll` marks the panel
/// for a delayed scroll-into-view.
pub fn results_container(view: &ResultsView, visible: bool, scroll: Option<Duration>) -> Markup {
    let style = if visible { "display: block" } else { "display: none" };
    let scroll_ms = scroll.map(|d| d.as_millis().to_string());

    html! {
        section id="resultsContainer" class="results" style=(style) data-scroll-delay-ms=[scroll_ms] {
            div class="summary" {
                h3 { "Wholesale Price" }
                (stat("lowestPrice", "Lowest", &view.prices.lowest))
                (stat("averagePrice", "Average", &view.prices.average))
                (stat("highestPrice", "Highest", &view.prices.highest))
            }
            div class="summary" {
                h3 { "Kilometres" }
                (stat("lowestKms", "Lowest", &view.kms.lowest))
                (stat("averageKms", "Average", &view.kms.average))
                (stat("highestKms", "Highest", &view.kms.highest))
            }
            div class="regions" {
                @for region in Region::ALL {
                    (region_container(region, view.card_for(region)))
                }
            }
        }
    }
}
