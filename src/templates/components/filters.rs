use crate::domain::filters::{ODOMETER_MAX, ODOMETER_MIN, ODOMETER_STEP, YEAR_MAX, YEAR_MIN};
use crate::domain::vin::VIN_LENGTH;
use crate::domain::{FilterState, SelectControl};
use maud::{html, Markup};

/// The VIN box. Every keystroke posts it to `/vin`, which answers with this
/// same fragment holding the sanitized value.
pub fn vin_input(vin: &str) -> Markup {
    html! {
        input
            type="text"
            id="vin"
            name="vin"
            value=(vin)
            maxlength=(VIN_LENGTH)
            placeholder="Enter 17-character VIN"
            autocomplete="off"
            spellcheck="false"
            hx-post="/vin"
            hx-trigger="input"
            hx-target="this"
            hx-swap="outerHTML";
    }
}

pub fn year_labels(f: &FilterState) -> Markup {
    html! {
        span id="yearLabels" class="range-labels" {
            span id="yearMinDisplay" { (f.year_min_label) }
            " - "
            span id="yearMaxDisplay" { (f.year_max_label) }
        }
    }
}

pub fn odometer_labels(f: &FilterState) -> Markup {
    html! {
        span id="odometerLabels" class="range-labels" {
            span id="odometerMin" { (f.odometer_min_label) }
            " - "
            span id="odometerMax" { (f.odometer_max_label) }
            " km"
        }
    }
}

pub fn year_slider(f: &FilterState) -> Markup {
    html! {
        div class="filter" {
            label for="yearMin" { "Year " (year_labels(f)) }
            input
                type="range"
                id="yearMin"
                name="year"
                min=(YEAR_MIN)
                max=(YEAR_MAX)
                step="1"
                value=(f.year)
                hx-post="/filters/year"
                hx-trigger="input"
                hx-target="#yearLabels"
                hx-swap="outerHTML";
        }
    }
}

pub fn odometer_slider(f: &FilterState) -> Markup {
    html! {
        div class="filter" {
            label for="odometerSlider" { "Odometer " (odometer_labels(f)) }
            input
                type="range"
                id="odometerSlider"
                name="odometer"
                min=(ODOMETER_MIN)
                max=(ODOMETER_MAX)
                step=(ODOMETER_STEP)
                value=(f.odometer)
                hx-post="/filters/odometer"
                hx-trigger="input"
                hx-target="#odometerLabels"
                hx-swap="outerHTML";
        }
    }
}

pub fn select_control(id: &str, name: &str, label: &str, control: &SelectControl) -> Markup {
    html! {
        div class="filter" {
            label for=(id) { (label) }
            select id=(id) name=(name) data-extensible=(if control.allows_novel() { "true" } else { "false" }) {
                @for opt in control.options() {
                    option value=(opt.value) selected[control.is_selected(&opt.value)] { (opt.label) }
                }
            }
        }
    }
}

/// The whole filter panel.
pub fn filter_panel(f: &FilterState) -> Markup {
    html! {
        section class="card filters" {
            h2 { "Filters" }
            (year_slider(f))
            (odometer_slider(f))
            (select_control("make", "make", "Make", &f.make))
            (select_control("model", "model", "Model", &f.model))
            (select_control("trim", "trim", "Trim", &f.trim))
            (select_control("province", "province", "Province", &f.province))
            (select_control("saleDate", "saleDate", "Sale Date", &f.sale_date))
        }
    }
}
