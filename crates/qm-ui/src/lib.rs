//! User interface components for the qualification model dashboard
//!
//! This crate provides the header with the tab strip and export button, the
//! scrolling content area, transient status messages and the theme.

pub mod shell;
pub mod theme;

use std::time::{Duration, Instant};

pub use shell::{central_panel, header, ShellAction};
pub use theme::{apply_theme, Theme};

/// How long a status message stays on screen
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(10);

/// UI state that persists across frames
#[derive(Default)]
pub struct UiState {
    /// Messages to display
    pub status_messages: Vec<StatusMessage>,
}

impl UiState {
    pub fn push_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(StatusKind::Info, title.into(), message.into());
    }

    pub fn push_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(StatusKind::Error, title.into(), message.into());
    }

    fn push(&mut self, kind: StatusKind, title: String, message: String) {
        self.status_messages.push(StatusMessage {
            kind,
            title,
            message,
            timestamp: Instant::now(),
        });
    }

    /// Drop messages older than `STATUS_TIMEOUT`
    pub fn expire_messages(&mut self, now: Instant) {
        self.status_messages
            .retain(|msg| now.duration_since(msg.timestamp) < STATUS_TIMEOUT);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Message to display
pub struct StatusMessage {
    pub kind: StatusKind,
    pub title: String,
    pub message: String,
    pub timestamp: Instant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_expire() {
        let mut state = UiState::default();
        state.push_info("Export complete", "central-highlands-population-data.csv");
        state.push_error("Export failed", "disk full");
        assert_eq!(state.status_messages.len(), 2);
        assert_eq!(state.status_messages[1].kind, StatusKind::Error);

        state.expire_messages(Instant::now());
        assert_eq!(state.status_messages.len(), 2);

        state.expire_messages(Instant::now() + STATUS_TIMEOUT + Duration::from_secs(1));
        assert!(state.status_messages.is_empty());
    }
}
