use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sunshine::{SunshineConfig, WeatherService, telemetry};
use tracing::error;

/// Current weather and outfit advice for a city, in Korean
#[derive(Debug, Parser)]
#[command(name = "sunshine", version, about)]
struct Cli {
    /// City or region name, e.g. "seoul" or "부산"
    city: String,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the generative advisor regardless of configuration
    #[arg(long)]
    llm: bool,

    /// Print only the outfit recommendation
    #[arg(long)]
    outfit: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = SunshineConfig::load_from_path(cli.config)?;
    if cli.llm {
        config.llm.enabled = true;
    }
    telemetry::init_tracing(&config.logging)?;

    let service = WeatherService::from_config(&config)?;
    let result = if cli.outfit {
        service.get_outfit_recommendation(&cli.city).await
    } else {
        service.get_weather_summary(&cli.city).await
    };

    match result {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Request for '{}' failed: {}", cli.city, e);
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
