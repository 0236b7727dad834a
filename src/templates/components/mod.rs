use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod filters;
pub mod messages;
pub mod results;

pub use card::region_container;
pub use error::error_page;

/// One of the form's submit buttons. Posts the whole form to `action`
/// through htmx, swapping `#app`; falls back to a plain form post.
pub fn action_button(id: &str, label: &str, action: &str, disabled: bool) -> Markup {
    html! {
        button
            type="submit"
            id=(id)
            class="btn"
            formaction=(action)
            hx-post=(action)
            hx-target="#app"
            hx-select="#app"
            hx-swap="outerHTML"
            hx-indicator="#loadingIndicator"
            hx-disabled-elt="#decodeBtn, #showResults"
            disabled[disabled]
        {
            (label)
        }
    }
}
