//! Presentation state owned by the application.

mod navigation;
mod prediction;

pub use navigation::View;
pub use prediction::{PredictionOutcome, PredictionState};

use crate::settings::Settings;

/// Top-level application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Active view
    pub view: View,
    pub prediction: PredictionState,
    /// User preferences
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Switches to `view`; returns whether the view changed.
    pub fn navigate(&mut self, view: View) -> bool {
        if self.view == view {
            return false;
        }
        tracing::debug!(from = ?self.view, to = ?view, "navigate");
        self.view = view;
        true
    }
}
