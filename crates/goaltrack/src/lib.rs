//! `goaltrack` - A minimal goal-tracking web service
//!
//! This library holds the goal dataset, the page loaders that read it, and the
//! HTTP router that serves them.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod calendar;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod goal;
pub mod loaders;
pub mod logging;
pub mod server;

pub use calendar::{CalendarEvent, EventId, EventTime};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{Error, Result};
pub use goal::{Goal, GoalSchedule, GoalSummary};
pub use loaders::SlugMode;
pub use logging::init_logging;
pub use server::{build_router, AppState};
