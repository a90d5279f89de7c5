mod alert;
mod all;
mod drawer;
mod footer;
mod header;
mod log;
mod screens;

use self::log::log;
use super::*;
use alert::{alert, confirmation};
use drawer::drawer;
use footer::footer;
use header::header;
use screens::screen;

pub use all::all as render;
