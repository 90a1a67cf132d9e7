//! Service layer for the analysis logic.
//!
//! This module contains the pure computation that sits between the caller's
//! data access (fetching watering events) and whatever the caller does with
//! the result (rendering a banner, persisting a suggestion row).

pub mod watering;

pub(crate) mod stats;

pub use watering::{analyze_watering_schedule, draft_schedule_suggestion, format_schedule_suggestion};
