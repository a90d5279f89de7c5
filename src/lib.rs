//! A terminal health companion.
//!
//! The shell shows one of seven screens under a header bar and offers a
//! slide-out drawer to switch between them.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
