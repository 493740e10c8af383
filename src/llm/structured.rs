//! Schema-constrained output: a JSON Schema rendered into the prompt and a
//! strict decoder for the response.

use std::marker::PhantomData;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Format instructions and decoder for responses shaped like `T`
pub struct StructuredOutput<T> {
    format: String,
    _target: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned + JsonSchema> StructuredOutput<T> {
    #[must_use]
    pub fn new() -> Self {
        let schema = schemars::schema_for!(T);
        let schema_json = serde_json::to_string_pretty(&schema)
            .expect("JSON Schema derived by schemars always serializes");
        let format = format!(
            "Your response should be in JSON format.\n\
             Do not include any explanations, only provide a RFC8259 compliant JSON response following this format without deviation.\n\
             Do not include markdown code blocks in your response.\n\
             Here is the JSON Schema instance your output must adhere to:\n\
             ```{schema_json}```"
        );
        Self {
            format,
            _target: PhantomData,
        }
    }

    /// Instructions to embed in the prompt
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Decode `text` as `T`. Anything other than a single JSON document
    /// (optionally wrapped in one markdown code fence) is rejected.
    pub fn parse(&self, text: &str) -> Result<T, serde_json::Error> {
        serde_json::from_str(strip_code_fence(text))
    }
}

impl<T: DeserializeOwned + JsonSchema> Default for StructuredOutput<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };
    body.strip_prefix("json").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, JsonSchema, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Pair {
        first_field: String,
        second: Option<f64>,
    }

    #[test]
    fn test_format_embeds_schema() {
        let output = StructuredOutput::<Pair>::new();
        assert!(output.format().contains("JSON Schema"));
        assert!(output.format().contains("firstField"));
        assert!(output.format().contains("second"));
    }

    #[test]
    fn test_parse_plain_json() {
        let output = StructuredOutput::<Pair>::new();
        let pair = output.parse(r#" {"firstField": "a", "second": 1.5} "#).unwrap();
        assert_eq!(
            pair,
            Pair {
                first_field: "a".to_string(),
                second: Some(1.5)
            }
        );
    }

    #[test]
    fn test_parse_fenced_json() {
        let output = StructuredOutput::<Pair>::new();
        let pair = output
            .parse("```json\n{\"firstField\": \"a\", \"second\": null}\n```")
            .unwrap();
        assert_eq!(pair.second, None);
    }

    #[test]
    fn test_parse_rejects_surrounding_prose() {
        let output = StructuredOutput::<Pair>::new();
        let result = output.parse("Sure! Here it is: {\"firstField\": \"a\"} Hope this helps.");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_missing_required_field() {
        let output = StructuredOutput::<Pair>::new();
        assert!(output.parse(r#"{"second": 2.0}"#).is_err());
    }
}
