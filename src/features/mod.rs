//! Features - Vertical Feature Slices
//!
//! Each feature contains its page and local widgets.

pub mod counter;
