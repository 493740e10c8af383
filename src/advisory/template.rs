//! Rule-based advisory used when the generative backend is disabled

use crate::models::{Advisory, Place, WeatherReading};

const OUTFIT_COLD: &str = "두꺼운 외투(패딩/코트)와 목도리 등 보온을 권장해요. 바람이 있으면 체감이 더 낮을 수 있어요.";
const OUTFIT_COOL: &str = "가벼운 자켓/가디건 레이어드를 권장해요. 바람이 있으면 얇은 바람막이가 도움이 될 수 있어요.";
const OUTFIT_MILD: &str = "긴팔 또는 얇은 겉옷 정도가 무난해요. 실내외 온도 차에 대비해 가벼운 겉옷을 챙기면 좋아요.";
const OUTFIT_WARM: &str = "가볍고 통풍이 좋은 옷차림을 권장해요. 수분 보충과 자외선 대비도 함께 챙겨요.";

/// Deterministic advisory from fixed sentence templates and thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateAdvisory;

impl TemplateAdvisory {
    /// Summarize current conditions. Pure and total.
    #[must_use]
    pub fn summarize(&self, place: &Place, reading: &WeatherReading) -> Advisory {
        let weather_summary = format!(
            "{} 현재 날씨는 {}입니다. 기온 {}(체감 {}), 습도 {}%, 풍속 {} 입니다.",
            place.name(),
            reading.description(),
            reading.format_temperature(),
            reading.format_apparent_temperature(),
            reading.relative_humidity,
            reading.format_wind()
        );

        Advisory::from_template(
            weather_summary,
            outfit_for(reading.apparent_temperature).to_string(),
        )
    }
}

/// Pick an outfit sentence by apparent temperature; boundaries belong to the
/// colder bucket.
fn outfit_for(apparent_temperature: f64) -> &'static str {
    match apparent_temperature {
        t if t <= 5.0 => OUTFIT_COLD,
        t if t <= 15.0 => OUTFIT_COOL,
        t if t <= 23.0 => OUTFIT_MILD,
        _ => OUTFIT_WARM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reading(apparent_temperature: f64) -> WeatherReading {
        WeatherReading {
            temperature: 20.5,
            apparent_temperature,
            relative_humidity: 65,
            wind_speed: 5.7,
            weather_code: 0,
        }
    }

    fn seoul() -> Place {
        Place::new("Seoul", 37.5665, 126.978).unwrap()
    }

    #[test]
    fn test_weather_summary_template() {
        let advisory = TemplateAdvisory.summarize(&seoul(), &reading(19.0));
        assert_eq!(
            advisory.weather_summary(),
            "Seoul 현재 날씨는 맑음입니다. 기온 20.5°C(체감 19.0°C), 습도 65%, 풍속 5.7m/s 입니다."
        );
        assert_eq!(advisory.outfit_summary(), OUTFIT_MILD);
    }

    #[rstest]
    #[case(-12.0, OUTFIT_COLD)]
    #[case(5.0, OUTFIT_COLD)]
    #[case(5.1, OUTFIT_COOL)]
    #[case(15.0, OUTFIT_COOL)]
    #[case(15.1, OUTFIT_MILD)]
    #[case(23.0, OUTFIT_MILD)]
    #[case(23.1, OUTFIT_WARM)]
    #[case(35.0, OUTFIT_WARM)]
    fn test_outfit_buckets(#[case] apparent: f64, #[case] expected: &str) {
        let advisory = TemplateAdvisory.summarize(&seoul(), &reading(apparent));
        assert_eq!(advisory.outfit_summary(), expected);
    }

    #[test]
    fn test_summarize_is_pure() {
        let place = seoul();
        let current = reading(9.3);
        let first = TemplateAdvisory.summarize(&place, &current);
        let second = TemplateAdvisory.summarize(&place, &current);
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_rounds_ties_half_up() {
        let current = WeatherReading {
            temperature: 20.15,
            apparent_temperature: 19.05,
            relative_humidity: 40,
            wind_speed: 7.25,
            weather_code: 1,
        };
        let advisory = TemplateAdvisory.summarize(&seoul(), &current);
        assert_eq!(
            advisory.weather_summary(),
            "Seoul 현재 날씨는 대체로 맑음입니다. 기온 20.2°C(체감 19.1°C), 습도 40%, 풍속 7.3m/s 입니다."
        );
    }

    #[test]
    fn test_unknown_code_still_summarizes() {
        let mut current = reading(10.0);
        current.weather_code = 42;
        let advisory = TemplateAdvisory.summarize(&seoul(), &current);
        assert!(advisory.weather_summary().contains("알 수 없음"));
    }
}
