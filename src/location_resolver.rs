//! Location Resolution Module
//!
//! Resolves free-text place names into validated [`Place`]s by asking a
//! generative backend for coordinates. Successful resolutions are cached for
//! the lifetime of the resolver.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::llm::{StructuredOutput, TextGenerator};
use crate::models::Place;
use crate::{Result, SunshineError};

/// Anything that can turn a place name into coordinates
#[async_trait]
pub trait CityResolver: Send + Sync {
    /// Resolve `raw_name` into a [`Place`].
    ///
    /// # Errors
    ///
    /// [`SunshineError::InvalidInput`] for a blank name,
    /// [`SunshineError::Resolution`] when no valid coordinates can be found.
    async fn resolve(&self, raw_name: &str) -> Result<Place>;
}

/// Shape the generator is asked to answer with
#[derive(Debug, Deserialize, JsonSchema)]
struct CityGeo {
    /// Representative name of the place
    name: Option<String>,
    /// Latitude in decimal degrees, null when unknown
    latitude: Option<f64>,
    /// Longitude in decimal degrees, null when unknown
    longitude: Option<f64>,
}

/// Resolver backed by a [`TextGenerator`] acting as a geocoding assistant
pub struct LlmCityResolver {
    generator: Arc<dyn TextGenerator>,
    output: StructuredOutput<CityGeo>,
    cache: DashMap<String, Place>,
}

impl LlmCityResolver {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            output: StructuredOutput::new(),
            cache: DashMap::new(),
        }
    }

    /// Number of cached resolutions
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn normalize(raw_name: &str) -> String {
        raw_name.trim().to_lowercase()
    }

    fn render_prompt(&self, raw_name: &str) -> String {
        format!(
            "너는 지오코딩 도우미야.\n\
             사용자가 입력한 도시/지역 이름을 보고, 해당 위치를 대표하는 좌표(위도/경도)를 반환해.\n\
             \n\
             반드시 아래 형식 지시(format)를 따르고, 다른 텍스트는 절대 포함하지 마.\n\
             모르면 임의로 만들지 말고 latitude/longitude를 null로 반환해.\n\
             \n\
             입력: \"{raw_name}\"\n\
             \n\
             {format}\n",
            format = self.output.format()
        )
    }

    fn to_place(geo: CityGeo, raw_name: &str) -> Result<Place> {
        let name = geo
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| raw_name.trim());

        Place::from_optional(name, geo.latitude, geo.longitude)
            .map_err(|e| SunshineError::resolution(raw_name, e.to_string()))
    }
}

#[async_trait]
impl CityResolver for LlmCityResolver {
    #[instrument(name = "resolve_city", skip(self))]
    async fn resolve(&self, raw_name: &str) -> Result<Place> {
        if raw_name.trim().is_empty() {
            return Err(SunshineError::invalid_input("city name must not be blank"));
        }

        let key = Self::normalize(raw_name);
        if let Some(cached) = self.cache.get(&key).map(|entry| entry.value().clone()) {
            debug!("Resolver cache hit for '{}'", key);
            return Ok(cached);
        }
        debug!("Resolver cache miss for '{}'", key);

        let prompt = self.render_prompt(raw_name);
        let completion = self.generator.complete(&prompt).await?;

        let geo = self.output.parse(&completion.text).map_err(|e| {
            SunshineError::resolution(raw_name, format!("response did not match schema: {e}"))
        })?;
        let place = Self::to_place(geo, raw_name)?;

        info!(
            "Resolved '{}' to {} ({})",
            raw_name,
            place.name(),
            place.format_coordinates()
        );
        self.cache.insert(key, place.clone());
        Ok(place)
    }
}
