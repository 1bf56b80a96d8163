//! Counter Starter Library
//!
//! This crate provides the application logic for the counter starter, a
//! minimal native GPUI app: one page holding a click counter, plus the
//! surrounding shell.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
