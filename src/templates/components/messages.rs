use crate::controller::{Message, UiState};
use maud::{html, Markup};

const HIDDEN: &str = "display: none";
const SHOWN: &str = "display: block";

fn display(visible: bool) -> &'static str {
    if visible {
        SHOWN
    } else {
        HIDDEN
    }
}

/// Error and success lines; at most one is visible. Informational messages
/// use the success line.
pub fn message_area(ui: &UiState) -> Markup {
    let (error, success) = match &ui.message {
        Some(Message::Error(t)) => (Some(t.as_str()), None),
        Some(Message::Success(t)) | Some(Message::Info(t)) => (None, Some(t.as_str())),
        None => (None, None),
    };

    html! {
        div id="errorMessage" class="message error" role="alert" style=(display(error.is_some())) {
            @if let Some(text) = error { (text) }
        }
        div id="successMessage" class="message success" role="status" style=(display(success.is_some())) {
            @if let Some(text) = success { (text) }
        }
    }
}

/// htmx reveals `.htmx-indicator` while a request is in flight; a server-side
/// render during loading adds `htmx-request` to show it as well.
pub fn loading_indicator(loading: bool) -> Markup {
    let class = if loading {
        "htmx-indicator htmx-request"
    } else {
        "htmx-indicator"
    };

    html! {
        div id="loadingIndicator" class=(class) {
            span class="spinner" aria-hidden="true" {}
            " Loading..."
        }
    }
}
