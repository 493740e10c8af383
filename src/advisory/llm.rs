//! Generative weather advisory with structured output and usage accounting

use std::sync::Arc;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::WeatherAdvisor;
use crate::llm::{CostEstimator, StructuredOutput, TextGenerator, UsageRecord};
use crate::models::{Advisory, Place, WeatherReading};
use crate::{Result, SunshineError};

/// Shape the generator is asked to answer with
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct Advice {
    /// 2-3 sentence weather summary
    weather_summary: String,
    /// 2-4 sentence outfit recommendation
    outfit_summary: String,
}

/// Advisor asking a [`TextGenerator`] for a two-part Korean advisory
pub struct LlmWeatherAdvisor {
    generator: Arc<dyn TextGenerator>,
    cost_estimator: CostEstimator,
    output: StructuredOutput<Advice>,
}

impl LlmWeatherAdvisor {
    pub fn new(generator: Arc<dyn TextGenerator>, cost_estimator: CostEstimator) -> Self {
        Self {
            generator,
            cost_estimator,
            output: StructuredOutput::new(),
        }
    }

    fn render_prompt(&self, place: &Place, reading: &WeatherReading) -> String {
        format!(
            "너는 한국어로 답하는 날씨 리포터이자 스타일리스트야.\n\
             입력된 \"현재 날씨 수치\"를 바탕으로\n\
             1) 날씨 요약(weatherSummary)\n\
             2) 옷차림 추천(outfitSummary)\n\
             을 생성해.\n\
             \n\
             제약:\n\
             - 반드시 아래 JSON 형식만 출력 (다른 텍스트 금지)\n\
             - weatherSummary는 2~3문장, 수치(기온/체감/습도/풍속)와 상태를 자연스럽게 포함\n\
             - outfitSummary는 2~4문장, 기온/체감/바람/강수 가능성을 근거로 추천\n\
             - 과장, 단정적 예보 금지(\"가능성\", \"권장\" 등 안전한 표현)\n\
             - 브랜드 언급 금지\n\
             \n\
             [도시]\n\
             - 이름: {name}\n\
             \n\
             [현재 날씨]\n\
             - 기온: {temperature}\n\
             - 체감: {apparent}\n\
             - 습도: {humidity}%\n\
             - 풍속: {wind}\n\
             - 상태: {description} (code={code})\n\
             \n\
             {format}\n",
            name = place.name(),
            temperature = reading.format_temperature(),
            apparent = reading.format_apparent_temperature(),
            humidity = reading.relative_humidity,
            wind = reading.format_wind(),
            description = reading.description(),
            code = reading.weather_code,
            format = self.output.format()
        )
    }
}

#[async_trait]
impl WeatherAdvisor for LlmWeatherAdvisor {
    #[instrument(name = "llm_advise", skip_all, fields(place = %place.name()))]
    async fn advise(&self, place: &Place, reading: &WeatherReading) -> Result<Advisory> {
        let prompt = self.render_prompt(place, reading);
        let completion = self.generator.complete(&prompt).await?;

        let advice = self.output.parse(&completion.text).map_err(|e| {
            SunshineError::generation(format!(
                "advisory for '{}' did not match schema: {e}",
                place.name()
            ))
        })?;
        let advisory = Advisory::new(advice.weather_summary, advice.outfit_summary).map_err(
            |e| match e {
                SunshineError::Generation { message } => SunshineError::generation(format!(
                    "advisory for '{}' rejected: {message}",
                    place.name()
                )),
                other => other,
            },
        )?;

        let usage = UsageRecord::from_metadata(completion.usage.as_ref());
        let estimated_usd = self
            .cost_estimator
            .estimate_usd(usage.input_tokens, usage.output_tokens);
        info!(
            feature = "weather_advice",
            model = %usage.model,
            request_id = %usage.request_id,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            total_tokens = usage.total_tokens,
            estimated_usd = %estimated_usd,
            city = %place.name(),
            "llm_usage"
        );

        Ok(advisory)
    }
}
