//! Advisory generation: generative and template-based

use async_trait::async_trait;

use crate::Result;
use crate::models::{Advisory, Place, WeatherReading};

pub mod llm;
pub mod outfit;
pub mod template;

pub use llm::LlmWeatherAdvisor;
pub use outfit::LlmOutfitRecommender;
pub use template::TemplateAdvisory;

/// Produces an [`Advisory`] for a place and its current conditions
#[async_trait]
pub trait WeatherAdvisor: Send + Sync {
    /// # Errors
    ///
    /// Returns [`crate::SunshineError::Generation`] if the backend fails or
    /// its answer is unusable.
    async fn advise(&self, place: &Place, reading: &WeatherReading) -> Result<Advisory>;
}
