//! Event handling module.
//!
//! Terminal events (keys, mouse clicks, resizes) are polled on a separate
//! thread and dispatched against the state on the main thread.

pub mod terminal;
