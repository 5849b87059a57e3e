#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the transient snackbar notification.
///
/// Validation errors stay on their fields; everything else that needs the
/// user's attention (auth failures, mutation outcomes) goes through here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub snackbar: Option<Snackbar>,
}

/// A single transient message with a display severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snackbar {
    pub message: String,
    pub severity: Severity,
}

/// Display severity for snackbar messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Error,
    #[default]
    Success,
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl UiState {
    /// Show a message, replacing any snackbar currently on screen.
    pub fn show_snackbar(&mut self, message: impl Into<String>, severity: Severity) {
        self.snackbar = Some(Snackbar {
            message: message.into(),
            severity,
        });
    }

    pub fn hide_snackbar(&mut self) {
        self.snackbar = None;
    }
}
