//! Panel layout state for the three-panel dashboard.
//!
//! DESIGN
//! ======
//! Four presentation preferences persist across reloads via `localStorage`
//! under fixed key names. There is no versioning or migration: a value that
//! fails to parse falls back to the default.

use crate::util::persistence;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

pub const DEFAULT_LEFT_PANEL_WIDTH: f64 = 250.0;
pub const DEFAULT_RIGHT_PANEL_WIDTH: f64 = 250.0;
/// Width of a collapsed panel — just enough to keep its toggle reachable.
pub const COLLAPSED_PANEL_WIDTH: f64 = 48.0;
/// The right panel may take at most this fraction of the container.
pub const MAX_RIGHT_PANEL_FRACTION: f64 = 0.75;

// localStorage keys. The names are part of the persisted contract.
pub const KEY_LEFT_PANEL_COLLAPSED: &str = "isLeftPanelCollapsed";
pub const KEY_RIGHT_PANEL_WIDTH: &str = "rightPanelWidth";
pub const KEY_TABLE_VISIBLE: &str = "isTableVisible";
pub const KEY_CONTRACT_VISIBLE: &str = "isContractVisible";

/// Panel layout preferences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiState {
    pub left_panel_collapsed: bool,
    pub right_panel_width: f64,
    pub table_visible: bool,
    pub contract_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            left_panel_collapsed: false,
            right_panel_width: DEFAULT_RIGHT_PANEL_WIDTH,
            table_visible: true,
            contract_visible: true,
        }
    }
}

impl UiState {
    /// Restore preferences from `localStorage`, field by field, falling back
    /// to the default for anything missing or unparsable.
    #[must_use]
    pub fn load() -> Self {
        let defaults = Self::default();
        Self {
            left_panel_collapsed: persistence::load_json(KEY_LEFT_PANEL_COLLAPSED)
                .unwrap_or(defaults.left_panel_collapsed),
            right_panel_width: persistence::load_json(KEY_RIGHT_PANEL_WIDTH)
                .unwrap_or(defaults.right_panel_width),
            table_visible: persistence::load_json(KEY_TABLE_VISIBLE).unwrap_or(defaults.table_visible),
            contract_visible: persistence::load_json(KEY_CONTRACT_VISIBLE)
                .unwrap_or(defaults.contract_visible),
        }
    }

    /// Persist all four preferences.
    pub fn persist(&self) {
        persistence::save_json(KEY_LEFT_PANEL_COLLAPSED, &self.left_panel_collapsed);
        persistence::save_json(KEY_RIGHT_PANEL_WIDTH, &self.right_panel_width);
        persistence::save_json(KEY_TABLE_VISIBLE, &self.table_visible);
        persistence::save_json(KEY_CONTRACT_VISIBLE, &self.contract_visible);
    }

    /// The right panel counts as collapsed at (or below) the rail width.
    #[must_use]
    pub fn right_panel_collapsed(&self) -> bool {
        self.right_panel_width <= COLLAPSED_PANEL_WIDTH
    }
}

/// Clamp a drag-resize width into `[collapsed, fraction × container]`.
#[must_use]
pub fn clamp_right_width(desired: f64, container_width: f64) -> f64 {
    let max = (container_width * MAX_RIGHT_PANEL_FRACTION).max(COLLAPSED_PANEL_WIDTH);
    desired.clamp(COLLAPSED_PANEL_WIDTH, max)
}

/// Toggle the right panel between collapsed and its default width.
#[must_use]
pub fn toggled_right_width(current: f64) -> f64 {
    if current <= COLLAPSED_PANEL_WIDTH {
        DEFAULT_RIGHT_PANEL_WIDTH
    } else {
        COLLAPSED_PANEL_WIDTH
    }
}
