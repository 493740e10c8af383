//! Weather summary service
//!
//! Composes resolution, the weather provider and advisory generation into a
//! single request. Steps run strictly in sequence; the first error aborts the
//! request unchanged.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::Result;
use crate::advisory::{LlmOutfitRecommender, LlmWeatherAdvisor, TemplateAdvisory, WeatherAdvisor};
use crate::config::SunshineConfig;
use crate::llm::{CostEstimator, OpenAiChatGenerator, TextGenerator};
use crate::location_resolver::{CityResolver, LlmCityResolver};
use crate::models::{Advisory, Place, WeatherReading};
use crate::weather::{OpenMeteoClient, WeatherProvider};

pub struct WeatherService {
    resolver: Arc<dyn CityResolver>,
    provider: Arc<dyn WeatherProvider>,
    advisor: Arc<dyn WeatherAdvisor>,
    outfit_recommender: Option<LlmOutfitRecommender>,
    template: TemplateAdvisory,
    llm_enabled: bool,
}

impl WeatherService {
    pub fn new(
        resolver: Arc<dyn CityResolver>,
        provider: Arc<dyn WeatherProvider>,
        advisor: Arc<dyn WeatherAdvisor>,
        llm_enabled: bool,
    ) -> Self {
        Self {
            resolver,
            provider,
            advisor,
            outfit_recommender: None,
            template: TemplateAdvisory,
            llm_enabled,
        }
    }

    /// Use a generative outfit recommender for [`Self::get_outfit_recommendation`]
    #[must_use]
    pub fn with_outfit_recommender(mut self, recommender: LlmOutfitRecommender) -> Self {
        self.outfit_recommender = Some(recommender);
        self
    }

    /// Wire the Open-Meteo provider and an OpenAI-compatible generator from
    /// configuration
    pub fn from_config(config: &SunshineConfig) -> anyhow::Result<Self> {
        let generator: Arc<dyn TextGenerator> = Arc::new(OpenAiChatGenerator::new(&config.llm)?);
        let provider = Arc::new(OpenMeteoClient::new(&config.weather)?);
        let resolver = Arc::new(LlmCityResolver::new(Arc::clone(&generator)));
        let advisor = Arc::new(LlmWeatherAdvisor::new(
            Arc::clone(&generator),
            CostEstimator::from_config(&config.llm_cost),
        ));

        Ok(
            Self::new(resolver, provider, advisor, config.llm.enabled)
                .with_outfit_recommender(LlmOutfitRecommender::new(generator)),
        )
    }

    #[must_use]
    pub fn llm_enabled(&self) -> bool {
        self.llm_enabled
    }

    async fn resolve_and_fetch(&self, city_name: &str) -> Result<(Place, WeatherReading)> {
        let place = self.resolver.resolve(city_name).await?;
        let reading = self.provider.fetch_current(&place).await?;
        debug!(?reading, "Fetched current weather for {}", place.name());
        Ok((place, reading))
    }

    async fn advisory_for(&self, place: &Place, reading: &WeatherReading) -> Result<Advisory> {
        if self.llm_enabled {
            self.advisor.advise(place, reading).await
        } else {
            Ok(self.template.summarize(place, reading))
        }
    }

    /// Weather summary and outfit recommendation for `city_name`, joined by a
    /// newline
    #[instrument(skip(self), fields(llm_enabled = self.llm_enabled))]
    pub async fn get_weather_summary(&self, city_name: &str) -> Result<String> {
        let (place, reading) = self.resolve_and_fetch(city_name).await?;
        let advisory = self.advisory_for(&place, &reading).await?;
        Ok(advisory.to_text())
    }

    /// Outfit recommendation only. Uses the generative recommender when
    /// enabled and configured, the template otherwise.
    #[instrument(skip(self), fields(llm_enabled = self.llm_enabled))]
    pub async fn get_outfit_recommendation(&self, city_name: &str) -> Result<String> {
        let (place, reading) = self.resolve_and_fetch(city_name).await?;
        match &self.outfit_recommender {
            Some(recommender) if self.llm_enabled => recommender.recommend(&place, &reading).await,
            _ => Ok(self
                .template
                .summarize(&place, &reading)
                .outfit_summary()
                .to_string()),
        }
    }
}
