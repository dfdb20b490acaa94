//! Calendar view configuration.

use crate::window::{ViewWindow, WindowError};

/// Settings of the calendar view hosting the slots.
///
/// Times use the calendar's `HH:mm:ss` notation. With the `serde` feature the
/// config reads the camelCase keys used by calendar option objects
/// (`slotMinTime`, `slotMaxTime`); missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CalendarConfig {
    /// First time of day shown by the view.
    pub slot_min_time: String,
    /// Last time of day shown by the view.
    pub slot_max_time: String,
}

impl CalendarConfig {
    pub fn new(slot_min_time: impl Into<String>, slot_max_time: impl Into<String>) -> Self {
        Self {
            slot_min_time: slot_min_time.into(),
            slot_max_time: slot_max_time.into(),
        }
    }

    /// Hours rendered by the view.
    pub fn window(&self) -> Result<ViewWindow, WindowError> {
        ViewWindow::from_slot_times(&self.slot_min_time, &self.slot_max_time)
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            slot_min_time: "07:00:00".to_string(),
            slot_max_time: "22:00:00".to_string(),
        }
    }
}
