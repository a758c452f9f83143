use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;

pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    /// Address to listen on
    #[arg(long, env = "ATELIER_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, env = "ATELIER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory the shader endpoint serves files from
    #[arg(long, env = "ATELIER_SHADER_DIR", default_value = "shaders")]
    pub shader_dir: PathBuf,

    #[command(flatten)]
    pub weather: WeatherArgs,
}

#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct WeatherArgs {
    /// Forecast endpoint of the weather provider
    #[arg(long = "weather-url", env = "ATELIER_WEATHER_URL", default_value = DEFAULT_WEATHER_URL)]
    pub url: String,

    #[arg(long, env = "ATELIER_LATITUDE", default_value_t = 52.52, allow_hyphen_values = true)]
    pub latitude: f64,

    #[arg(long, env = "ATELIER_LONGITUDE", default_value_t = 13.41, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Seconds before a forecast request is abandoned
    #[arg(long = "weather-timeout", env = "ATELIER_WEATHER_TIMEOUT", default_value_t = 10)]
    pub timeout_secs: u64,
}

impl Default for WeatherArgs {
    fn default() -> Self {
        Self {
            url: DEFAULT_WEATHER_URL.to_owned(),
            latitude: 52.52,
            longitude: 13.41,
            timeout_secs: 10,
        }
    }
}
