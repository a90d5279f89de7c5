//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct owning the active screen and the drawer
//! - Navigation types (Screen, DrawerItem)
//! - The drawer transition state machine
//! - Per-screen local state
//! - State error handling

mod alert;
pub mod drawer;
mod error;
mod navigation;
pub mod screens;

pub use alert::Alert;
pub use drawer::{Drawer, DrawerHit, DrawerPhase, Transition};
pub use error::StateError;
pub use navigation::{drawer_index_of, DrawerItem, Screen, DRAWER_ITEMS};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, HEADER_HEIGHT, MENU_BUTTON_WIDTH};
