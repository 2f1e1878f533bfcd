//! Core of the caldesk calendar widget.
//!
//! - `Event` and the JSON snapshot it is persisted as
//! - `storage` / `store` for the local key-value profile
//! - `view` calculators for the month, week and day grids
//! - `form` drafts and `dnd` moves, the two ways events change
//! - `Calendar`, the controller tying them together

pub mod calendar;
pub mod config;
pub mod constants;
pub mod dnd;
pub mod error;
pub mod event;
pub mod form;
pub mod labels;
pub mod storage;
pub mod store;
pub mod utils;
pub mod view;

pub use calendar::{ActiveView, Calendar};
pub use event::Event;
