//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the application's data.

pub mod settings;
