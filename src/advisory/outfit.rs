//! Free-text outfit recommendation

use std::sync::Arc;

use tracing::instrument;

use crate::llm::TextGenerator;
use crate::models::{Place, WeatherReading};
use crate::{Result, SunshineError};

/// Asks a [`TextGenerator`] for a short Korean outfit recommendation
pub struct LlmOutfitRecommender {
    generator: Arc<dyn TextGenerator>,
}

impl LlmOutfitRecommender {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    fn render_prompt(place: &Place, reading: &WeatherReading) -> String {
        format!(
            "너는 날씨 기반 복장 추천 스타일리스트야.\n\
             아래 입력(도시, 현재 날씨 수치)을 기반으로 오늘 입기 좋은 복장을 한국어로 추천해줘.\n\
             \n\
             요구사항:\n\
             - 2~4문장으로 작성\n\
             - 기온/체감온도/바람/습도/강수 가능성을 고려해서 이유를 짧게 포함\n\
             - 과장하지 말고, 애매하면 \"가벼운 겉옷\" 같이 안전한 표현 사용\n\
             - 특정 브랜드 언급 금지\n\
             - 우산/방수 같은 준비물도 필요하면 포함\n\
             \n\
             [도시]\n\
             - {name}\n\
             \n\
             [현재 날씨]\n\
             - 기온: {temperature}\n\
             - 체감: {apparent}\n\
             - 습도: {humidity}%\n\
             - 풍속: {wind}\n\
             - 상태: {description} (code={code})\n",
            name = place.name(),
            temperature = reading.format_temperature(),
            apparent = reading.format_apparent_temperature(),
            humidity = reading.relative_humidity,
            wind = reading.format_wind(),
            description = reading.description(),
            code = reading.weather_code,
        )
    }

    /// Recommend what to wear for the current conditions
    #[instrument(name = "recommend_outfit", skip_all, fields(place = %place.name()))]
    pub async fn recommend(&self, place: &Place, reading: &WeatherReading) -> Result<String> {
        let prompt = Self::render_prompt(place, reading);
        let completion = self.generator.complete(&prompt).await?;

        let text = completion.text.trim();
        if text.is_empty() {
            return Err(SunshineError::generation(format!(
                "outfit recommendation for '{}' is blank",
                place.name()
            )));
        }
        Ok(text.to_string())
    }
}
