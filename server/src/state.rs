use std::path::PathBuf;

use crate::config::Args;
use crate::weather::WeatherClient;

/// Shared, read-only state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub shader_dir: PathBuf,
    pub weather: WeatherClient,
}

impl AppState {
    pub fn new(shader_dir: PathBuf, weather: WeatherClient) -> Self {
        Self { shader_dir, weather }
    }

    pub fn from_args(args: &Args) -> Result<Self, reqwest::Error> {
        if !args.shader_dir.is_dir() {
            log::warn!(
                "shader directory {} does not exist, shader requests will 404",
                args.shader_dir.display()
            );
        }
        let weather = WeatherClient::new(&args.weather)?;
        Ok(Self::new(args.shader_dir.clone(), weather))
    }
}
