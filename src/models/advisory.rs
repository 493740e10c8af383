//! Two-part advisory: weather summary plus outfit recommendation

use serde::Serialize;

use crate::{Result, SunshineError};

/// Natural-language advisory. Neither part is ever blank.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Advisory {
    weather_summary: String,
    outfit_summary: String,
}

impl Advisory {
    /// Build an advisory, rejecting blank parts as a generation error
    pub fn new(weather_summary: impl Into<String>, outfit_summary: impl Into<String>) -> Result<Self> {
        let weather_summary = weather_summary.into().trim().to_string();
        let outfit_summary = outfit_summary.into().trim().to_string();

        if weather_summary.is_empty() {
            return Err(SunshineError::generation("weatherSummary is blank"));
        }
        if outfit_summary.is_empty() {
            return Err(SunshineError::generation("outfitSummary is blank"));
        }

        Ok(Self {
            weather_summary,
            outfit_summary,
        })
    }

    /// Build an advisory from text the crate itself wrote and knows to be non-blank
    pub(crate) fn from_template(weather_summary: String, outfit_summary: String) -> Self {
        Self {
            weather_summary,
            outfit_summary,
        }
    }

    #[must_use]
    pub fn weather_summary(&self) -> &str {
        &self.weather_summary
    }

    #[must_use]
    pub fn outfit_summary(&self) -> &str {
        &self.outfit_summary
    }

    /// Join both parts with a line separator
    #[must_use]
    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.weather_summary, self.outfit_summary)
    }
}
