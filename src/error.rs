//! Error types and handling for the sunshine weather pipeline

use thiserror::Error;

/// Main error type for the sunshine pipeline
#[derive(Error, Debug)]
pub enum SunshineError {
    /// The caller supplied an empty or otherwise unusable place name
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The generator could not produce valid coordinates for the input
    #[error("Could not resolve coordinates for '{input}': {reason}")]
    Resolution { input: String, reason: String },

    /// The generative backend failed or produced unusable output
    #[error("Generation error: {message}")]
    Generation { message: String },

    /// The weather provider failed to deliver current conditions
    #[error("Weather provider error: {message}")]
    UpstreamProvider { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SunshineError {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new resolution error for the given original input
    pub fn resolution<I: Into<String>, R: Into<String>>(input: I, reason: R) -> Self {
        Self::Resolution {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a new generation error
    pub fn generation<S: Into<String>>(message: S) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a new upstream provider error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::UpstreamProvider {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SunshineError::InvalidInput { message } => format!("Invalid input: {message}"),
            SunshineError::Resolution { input, .. } => {
                format!("Could not find coordinates for '{input}'. Try a more specific place name.")
            }
            SunshineError::Generation { .. } => {
                "The text generation service returned an unusable answer. Please try again later."
                    .to_string()
            }
            SunshineError::UpstreamProvider { .. } => {
                "Unable to fetch current weather. Please check your internet connection."
                    .to_string()
            }
            SunshineError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
        }
    }
}
