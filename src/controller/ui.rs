// src/controller/ui.rs
use std::time::Duration;

/// The single message line under the VIN box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Error(String),
    Success(String),
    Info(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Indicator shown and both action buttons disabled.
    pub loading: bool,
    pub message: Option<Message>,
    pub results_visible: bool,
    /// Set when freshly revealed results should be scrolled to.
    pub scroll_after: Option<Duration>,
}

impl UiState {
    /// Showing one kind of message hides the other.
    pub fn show_error(&mut self, text: impl Into<String>) {
        self.message = Some(Message::Error(text.into()));
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        self.message = Some(Message::Success(text.into()));
    }

    pub fn show_info(&mut self, text: impl Into<String>) {
        self.message = Some(Message::Info(text.into()));
    }

    pub fn hide_messages(&mut self) {
        self.message = None;
    }
}

/// Loading state for the lifetime of the guard. Dropping it, on any path
/// including unwinding, clears the flag.
pub struct LoadingScope<'a> {
    loading: &'a mut bool,
}

impl<'a> LoadingScope<'a> {
    pub fn enter(loading: &'a mut bool) -> Self {
        *loading = true;
        Self { loading }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        *self.loading
    }
}

impl Drop for LoadingScope<'_> {
    fn drop(&mut self) {
        *self.loading = false;
    }
}
