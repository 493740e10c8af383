//! `sunshine` - current weather and outfit advice for a place name
//!
//! Resolves free-text place names to coordinates with a generative backend,
//! fetches current conditions from Open-Meteo and summarises them in Korean,
//! either through the generative backend or a fixed template.

pub mod advisory;
pub mod config;
pub mod error;
pub mod llm;
pub mod location_resolver;
pub mod models;
pub mod service;
pub mod telemetry;
pub mod weather;

// Re-export core types for public API
pub use advisory::{LlmOutfitRecommender, LlmWeatherAdvisor, TemplateAdvisory, WeatherAdvisor};
pub use config::SunshineConfig;
pub use error::SunshineError;
pub use llm::{Completion, CostEstimator, TextGenerator, UsageMetadata, UsageRecord};
pub use location_resolver::{CityResolver, LlmCityResolver};
pub use models::{Advisory, Place, WeatherReading};
pub use service::WeatherService;
pub use weather::{OpenMeteoClient, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SunshineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
