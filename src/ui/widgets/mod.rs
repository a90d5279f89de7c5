//! Reusable UI widget components.
//!
//! This module contains styling utilities shared by every view.

pub mod styling;
