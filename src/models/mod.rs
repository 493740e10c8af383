//! Data models for the sunshine pipeline
//!
//! - Place: validated name and coordinates
//! - Weather: current-conditions reading
//! - Advisory: weather summary and outfit recommendation

pub mod advisory;
pub mod place;
pub mod weather;

pub use advisory::Advisory;
pub use place::{CoordinateError, Place};
pub use weather::WeatherReading;
