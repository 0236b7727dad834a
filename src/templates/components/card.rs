use crate::domain::format::{currency, thousands};
use crate::domain::{PricingCard, Region};
use maud::{html, Markup};

fn pricing_item(label: &str, value: Markup) -> Markup {
    html! {
        div class="pricing-item" {
            div class="pricing-label" { (label) }
            (value)
        }
    }
}

/// Summary block for one region's card.
pub fn pricing_card(card: &PricingCard) -> Markup {
    html! {
        h3 { (card.province) " - Wholesale Pricing" }

        (pricing_item("Vehicle", html! {
            div class="pricing-value" { (card.vehicle_description()) }
        }))
        (pricing_item("VIN", html! {
            div class="pricing-value pricing-vin" { (card.vin) }
        }))
        (pricing_item("Mileage", html! {
            div class="pricing-value" { (thousands(card.mileage)) }
            div class="pricing-subtitle" { "kilometers" }
        }))
        (pricing_item("Wholesale Price (Clean)", html! {
            div class="pricing-value pricing-price" { (currency(card.wholesale_price())) }
        }))
        (pricing_item("Published", html! {
            div class="pricing-value" { (card.publish_date_or_placeholder()) }
        }))
    }
}

/// The region's container; empty when the lookup had no card for it.
pub fn region_container(region: Region, card: Option<&PricingCard>) -> Markup {
    html! {
        div class="pricing-card" id=(region.container_id()) data-region=(region.label()) {
            @if let Some(card) = card {
                (pricing_card(card))
            }
        }
    }
}
