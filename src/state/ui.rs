//! Local UI chrome state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Presentation state for the app shell.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}
