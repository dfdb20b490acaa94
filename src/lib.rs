//! slotview - occupancy partitions for reservation slots in a day view
//!
//! A reservation slot carries an ordered list of free/reserved partitions that
//! add up to 100%. When a calendar only renders part of the day, the slot may
//! be cut off at the top or bottom; this crate recomputes the partitions for
//! the visible part so the rendered blocks keep their proportions.

pub mod clip;
pub mod config;
pub mod partition;
pub mod render;
pub mod slot;
pub mod units;
pub mod window;

pub use clip::{adjust_partitions, remove_margin_from_partitions};
pub use config::CalendarConfig;
pub use partition::{round_to_hundredths, sum_partitions, Partition};
pub use slot::{Slot, Span};
pub use window::ViewWindow;

// Re-export unit conversion traits for ergonomic use
pub use units::{convert, SameDim};

/// Identifier type used for slots.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
