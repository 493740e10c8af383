use async_trait::async_trait;

use crate::Result;
use crate::models::{Place, WeatherReading};

pub mod codes;
pub mod open_meteo;

pub use codes::weather_code_to_description;
pub use open_meteo::OpenMeteoClient;

/// Source of current weather conditions for a resolved place
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current reading for `place`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SunshineError::UpstreamProvider`] when the provider
    /// cannot be reached or answers with something unusable.
    async fn fetch_current(&self, place: &Place) -> Result<WeatherReading>;
}
